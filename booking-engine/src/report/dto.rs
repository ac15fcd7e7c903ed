//! Structured records for machine-readable output.

use serde::{Deserialize, Serialize};

use crate::domain::{Ticket, TransportMode};
use crate::ledger::ReservationLedger;

/// A ticket as a flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Caller-supplied ticket id
    pub ticket_id: String,

    /// Passenger name
    pub passenger_name: String,

    /// Origin code (e.g., "AL")
    pub origin_code: String,

    /// Origin display name
    pub origin: String,

    /// Destination code
    pub destination_code: String,

    /// Destination display name
    pub destination: String,

    /// Transport mode name
    pub transport: String,

    /// Total price
    pub price: f64,
}

impl TicketRecord {
    /// Create from a domain Ticket.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.id().to_string(),
            passenger_name: ticket.passenger_name().to_string(),
            origin_code: ticket.origin().code().to_string(),
            origin: ticket.origin().name().to_string(),
            destination_code: ticket.destination().code().to_string(),
            destination: ticket.destination().name().to_string(),
            transport: ticket.mode().as_str().to_string(),
            price: ticket.price(),
        }
    }
}

/// Confirmation emitted after a successful booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub ticket: TicketRecord,
}

impl BookingConfirmation {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            message: super::CONFIRMATION_HEADLINE.to_string(),
            ticket: TicketRecord::from_ticket(ticket),
        }
    }
}

/// Tickets booked under one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeReservations {
    pub transport: String,
    pub tickets: Vec<TicketRecord>,
}

/// Every reservation in the ledger, grouped by mode.
///
/// Modes with no tickets are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListing {
    pub reservations: Vec<ModeReservations>,
}

impl ReservationListing {
    pub fn from_ledger(ledger: &ReservationLedger) -> Self {
        let reservations = TransportMode::ALL
            .into_iter()
            .filter_map(|mode| {
                ledger.search(mode).map(|tickets| ModeReservations {
                    transport: mode.as_str().to_string(),
                    tickets: tickets.iter().map(TicketRecord::from_ticket).collect(),
                })
            })
            .collect();

        Self { reservations }
    }
}

/// Result of searching one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub transport: String,

    /// False when the mode has never been booked
    pub found: bool,

    pub tickets: Vec<TicketRecord>,
}

impl SearchResult {
    pub fn from_ledger(ledger: &ReservationLedger, mode: TransportMode) -> Self {
        let tickets: Vec<_> = ledger
            .search(mode)
            .unwrap_or_default()
            .iter()
            .map(TicketRecord::from_ticket)
            .collect();

        Self {
            transport: mode.as_str().to_string(),
            found: !tickets.is_empty(),
            tickets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    fn ledger() -> ReservationLedger {
        let mut ledger = ReservationLedger::with_defaults();
        ledger
            .add_reservation(
                TransportMode::Airplane,
                "A123",
                "Gabriela Santos",
                Location::Alagoas,
                Location::SaoPaulo,
            )
            .unwrap();
        ledger
    }

    #[test]
    fn ticket_record_fields() {
        let ledger = ledger();
        let record = TicketRecord::from_ticket(ledger.find("A123").unwrap());

        assert_eq!(record.ticket_id, "A123");
        assert_eq!(record.passenger_name, "Gabriela Santos");
        assert_eq!(record.origin_code, "AL");
        assert_eq!(record.origin, "Alagoas");
        assert_eq!(record.destination_code, "SP");
        assert_eq!(record.destination, "São Paulo");
        assert_eq!(record.transport, "Airplane");
        assert!((record.price - 742.0).abs() < 1e-9);
    }

    #[test]
    fn listing_omits_empty_modes() {
        let listing = ReservationListing::from_ledger(&ledger());
        assert_eq!(listing.reservations.len(), 1);
        assert_eq!(listing.reservations[0].transport, "Airplane");
    }

    #[test]
    fn search_result_not_found() {
        let result = SearchResult::from_ledger(&ledger(), TransportMode::Bus);
        assert!(!result.found);
        assert!(result.tickets.is_empty());
        assert_eq!(result.transport, "Bus");
    }

    #[test]
    fn json_shape() {
        let listing = ReservationListing::from_ledger(&ledger());
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["reservations"][0]["transport"], "Airplane");
        assert_eq!(json["reservations"][0]["tickets"][0]["ticket_id"], "A123");
        assert_eq!(json["reservations"][0]["tickets"][0]["origin_code"], "AL");

        let back: ReservationListing = serde_json::from_value(json).unwrap();
        assert_eq!(back, listing);
    }
}
