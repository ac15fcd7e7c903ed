use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use booking_engine::distances::brazil_distances;
use booking_engine::domain::{Location, TransportMode};
use booking_engine::ledger::{LedgerConfig, ReservationLedger};
use booking_engine::payment::{PaymentMethod, PaymentProcessor};
use booking_engine::report::{self, OutputFormat};

/// Sample bookings: (mode, ticket id, passenger, origin, destination, payment).
const SAMPLE_BOOKINGS: [(TransportMode, &str, &str, Location, Location, PaymentMethod); 3] = [
    (
        TransportMode::Airplane,
        "A123",
        "Gabriela Santos",
        Location::Alagoas,
        Location::SaoPaulo,
        PaymentMethod::CreditCard,
    ),
    (
        TransportMode::Train,
        "T456",
        "Rafaela Aparecida",
        Location::Sergipe,
        Location::RioDeJaneiro,
        PaymentMethod::Pix,
    ),
    (
        TransportMode::Bus,
        "B789",
        "Guilherme Lopes",
        Location::RioGrandeDoNorte,
        Location::MinasGerais,
        PaymentMethod::Cash,
    ),
];

fn run() -> Result<(), report::ReportError> {
    let config = LedgerConfig::from_env();
    let format = OutputFormat::from_env();
    info!(?config, %format, "starting booking demo");

    let mut ledger = ReservationLedger::new(brazil_distances(), config);

    for (mode, id, passenger, origin, destination, method) in SAMPLE_BOOKINGS {
        match ledger.add_reservation(mode, id, passenger, origin, destination) {
            Ok(ticket) => {
                println!("{}", report::render_confirmation(ticket, format)?);
                match PaymentProcessor::new(method).process(ticket.price()) {
                    Ok(receipt) => println!("{receipt}"),
                    Err(e) => error!(ticket_id = id, "payment failed: {e}"),
                }
                println!();
            }
            Err(e) => error!(ticket_id = id, "booking failed: {e}"),
        }
    }

    println!("List all reservations:");
    println!("{}", report::render_listing(&ledger, format)?);

    println!("Search for airplane reservations:");
    println!(
        "{}",
        report::render_search(&ledger, TransportMode::Airplane, format)?
    );

    info!(
        tickets = ledger.len(),
        revenue = ledger.total_revenue(),
        "booking demo finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
