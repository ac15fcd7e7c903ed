//! Domain error types.
//!
//! These errors represent rejected input and booking failures. Parse
//! failures of individual value types live next to those types.

use super::{Location, TicketId, TransportMode};

/// Input rejected before any ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Ticket id was empty or whitespace
    #[error("ticket id must not be empty")]
    EmptyTicketId,

    /// Passenger name was empty or whitespace
    #[error("passenger name must not be empty")]
    EmptyPassengerName,

    /// A ticket with this id is already in the ledger
    #[error("ticket id {0} is already booked")]
    DuplicateTicketId(TicketId),
}

/// Errors that can occur while booking a ticket.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    /// No distance is known between the two locations
    #[error("no route known from {origin} to {destination} by {mode}")]
    RouteUnknown {
        origin: Location,
        destination: Location,
        mode: TransportMode,
    },

    /// A booking context was used before a strategy was set
    #[error("transport strategy not set")]
    StrategyNotSet,

    /// The request failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
