//! Ticket and booking request types.

use std::fmt;

use super::error::ValidationError;
use super::{Location, TransportMode};

/// A caller-supplied ticket identifier.
///
/// Guaranteed non-empty (after trimming). Uniqueness is a property of a
/// ledger, not of the identifier itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(String);

impl TicketId {
    /// Parse a ticket identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicketId);
        }
        Ok(TicketId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated request to book one seat.
///
/// Holds everything a fare strategy needs except the transport mode, which
/// is passed alongside so the same request can be quoted under any mode.
///
/// # Examples
///
/// ```
/// use booking_engine::domain::{BookingRequest, Location};
///
/// let req = BookingRequest::new("A123", "Gabriela Santos", Location::Alagoas, Location::SaoPaulo)
///     .unwrap();
/// assert_eq!(req.ticket_id().as_str(), "A123");
///
/// // Passenger names must not be blank
/// assert!(BookingRequest::new("A124", "  ", Location::Alagoas, Location::SaoPaulo).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    ticket_id: TicketId,
    passenger_name: String,
    origin: Location,
    destination: Location,
}

impl BookingRequest {
    /// Validate and build a request.
    pub fn new(
        ticket_id: &str,
        passenger_name: &str,
        origin: Location,
        destination: Location,
    ) -> Result<Self, ValidationError> {
        let ticket_id = TicketId::parse(ticket_id)?;
        let passenger_name = passenger_name.trim();
        if passenger_name.is_empty() {
            return Err(ValidationError::EmptyPassengerName);
        }

        Ok(Self {
            ticket_id,
            passenger_name: passenger_name.to_string(),
            origin,
            destination,
        })
    }

    pub fn ticket_id(&self) -> &TicketId {
        &self.ticket_id
    }

    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    pub fn destination(&self) -> Location {
        self.destination
    }
}

/// A booked ticket.
///
/// Tickets are created once by a fare strategy and never mutated; all
/// fields are read through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    id: TicketId,
    passenger_name: String,
    origin: Location,
    destination: Location,
    mode: TransportMode,
    price: f64,
}

impl Ticket {
    /// Issue a ticket for a request at the given price.
    pub(crate) fn issue(request: BookingRequest, mode: TransportMode, price: f64) -> Self {
        Self {
            id: request.ticket_id,
            passenger_name: request.passenger_name,
            origin: request.origin,
            destination: request.destination,
            mode,
            price,
        }
    }

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    pub fn destination(&self) -> Location {
        self.destination
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Total price, always non-negative.
    pub fn price(&self) -> f64 {
        self.price
    }
}
