//! Reservation ledger.
//!
//! The ledger is the caller-facing entry point: it picks the fare strategy
//! for a transport mode, books the ticket, and keeps every ticket grouped
//! by mode for listing and search.

mod config;
mod reservations;

pub use config::{ALLOW_DUPLICATE_IDS_VAR, LedgerConfig, REJECT_UNKNOWN_ROUTES_VAR, parse_flag};
pub use reservations::ReservationLedger;
