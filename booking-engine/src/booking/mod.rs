//! Booking context: a holder for the currently selected fare strategy.
//!
//! Callers that want to pick a strategy once and then book repeatedly can
//! use [`BookingContext`]. Code that already knows the mode for each booking
//! should call [`crate::fares::book`] directly instead, which needs no
//! context and cannot be left unconfigured.

use tracing::{debug, warn};

use crate::distances::DistanceTable;
use crate::domain::{BookingError, BookingRequest, Ticket};
use crate::fares::FareStrategy;

/// Holds the active fare strategy and delegates bookings to it.
///
/// Starts unconfigured. [`set_strategy`](Self::set_strategy) moves it to
/// configured; there is no way back.
#[derive(Debug, Clone, Default)]
pub struct BookingContext {
    strategy: Option<FareStrategy>,
}

impl BookingContext {
    /// Create an unconfigured context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a strategy already set.
    pub fn with_strategy(strategy: FareStrategy) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Replace the active strategy.
    pub fn set_strategy(&mut self, strategy: FareStrategy) {
        match self.strategy.replace(strategy) {
            Some(previous) if previous != strategy => {
                debug!(from = %previous.mode(), to = %strategy.mode(), "strategy swapped");
            }
            _ => {}
        }
    }

    /// The active strategy, if any.
    pub fn strategy(&self) -> Option<FareStrategy> {
        self.strategy
    }

    pub fn is_configured(&self) -> bool {
        self.strategy.is_some()
    }

    /// Book a ticket with the active strategy.
    ///
    /// Fails with [`BookingError::StrategyNotSet`] if no strategy has been
    /// set. The failure is logged and the context remains usable.
    pub fn execute_booking(
        &self,
        table: &DistanceTable,
        request: BookingRequest,
    ) -> Result<Ticket, BookingError> {
        let Some(strategy) = self.strategy else {
            warn!(ticket_id = %request.ticket_id(), "transport strategy not set");
            return Err(BookingError::StrategyNotSet);
        };
        Ok(strategy.book(table, request))
    }
}
