//! Rendering of tickets and reservation listings.
//!
//! The core hands out plain domain values; this module turns them into
//! either Portuguese text (via askama templates) or JSON records.

mod dto;
pub mod templates;

use std::fmt;
use std::str::FromStr;

use askama::Template;
use tracing::warn;

use crate::domain::{Ticket, TransportMode};
use crate::ledger::ReservationLedger;

pub use dto::*;
pub use templates::*;

/// First line of every booking confirmation.
pub const CONFIRMATION_HEADLINE: &str = "A passagem foi reservada com sucesso.";

/// Errors that can occur while rendering output.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Template rendering failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when parsing an unknown output format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
pub struct UnknownOutputFormat(String);

/// How rendered output is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Environment variable selecting the output format.
pub const OUTPUT_FORMAT_VAR: &str = "BOOKING_OUTPUT";

impl OutputFormat {
    /// Resolve an optional setting, falling back to text when it is unset
    /// or not a known format.
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some(value) => value.parse().unwrap_or_else(|e| {
                warn!("{e}, falling back to text");
                OutputFormat::Text
            }),
            None => OutputFormat::Text,
        }
    }

    /// The format named by `BOOKING_OUTPUT`.
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(OUTPUT_FORMAT_VAR).ok().as_deref())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Render the confirmation for a freshly booked ticket.
pub fn render_confirmation(ticket: &Ticket, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(BookingConfirmationTemplate::new(ticket).render()?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &BookingConfirmation::from_ticket(ticket),
        )?),
    }
}

/// Render every reservation in the ledger.
pub fn render_listing(
    ledger: &ReservationLedger,
    format: OutputFormat,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(ReservationListTemplate::listing(ledger).render()?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &ReservationListing::from_ledger(ledger),
        )?),
    }
}

/// Render the reservations for one mode.
pub fn render_search(
    ledger: &ReservationLedger,
    mode: TransportMode,
    format: OutputFormat,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(ReservationListTemplate::search(ledger, mode).render()?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SearchResult::from_ledger(
            ledger, mode,
        ))?),
    }
}
