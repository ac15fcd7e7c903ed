//! Domain types for the fare booking engine.
//!
//! This module contains the core value types: places, transport modes,
//! booking requests and issued tickets. All types enforce their invariants
//! at construction time, so code that receives these types can trust their
//! validity.

mod error;
mod location;
mod mode;
mod ticket;

pub use error::{BookingError, ValidationError};
pub use location::{InvalidLocation, Location};
pub use mode::{TransportMode, UnsupportedTransportMode};
pub use ticket::{BookingRequest, Ticket, TicketId};
