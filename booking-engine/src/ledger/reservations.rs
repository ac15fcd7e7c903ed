//! The reservation ledger.
//!
//! Stores booked tickets per transport mode in insertion order. Entries are
//! append-only: nothing is edited or removed once booked.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::distances::{DistanceTable, brazil_distances};
use crate::domain::{
    BookingError, BookingRequest, Location, Ticket, TicketId, TransportMode, ValidationError,
};
use crate::fares;

use super::config::LedgerConfig;

/// Booked tickets, partitioned by transport mode.
#[derive(Debug, Clone)]
pub struct ReservationLedger {
    distances: DistanceTable,
    config: LedgerConfig,

    /// One sequence per mode, indexed by `TransportMode::index`.
    reservations: [Vec<Ticket>; 3],

    /// Every ticket id booked so far.
    ids: HashSet<TicketId>,
}

impl ReservationLedger {
    /// Create an empty ledger pricing against `distances`.
    pub fn new(distances: DistanceTable, config: LedgerConfig) -> Self {
        Self {
            distances,
            config,
            reservations: Default::default(),
            ids: HashSet::new(),
        }
    }

    /// An empty ledger over the compiled-in distance table with default
    /// configuration.
    pub fn with_defaults() -> Self {
        Self::new(brazil_distances(), LedgerConfig::default())
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Validate the raw fields and book a ticket under `mode`.
    ///
    /// On success the ticket is appended to the sequence for `mode` and a
    /// reference to it is returned. On failure the ledger is unchanged.
    pub fn add_reservation(
        &mut self,
        mode: TransportMode,
        ticket_id: &str,
        passenger_name: &str,
        origin: Location,
        destination: Location,
    ) -> Result<&Ticket, BookingError> {
        let request = BookingRequest::new(ticket_id, passenger_name, origin, destination)
            .inspect_err(|e| {
                warn!(ticket_id, mode = mode.as_str(), error = %e, "booking rejected");
            })?;
        self.add_request(mode, request)
    }

    /// Book an already-validated request under `mode`.
    pub fn add_request(
        &mut self,
        mode: TransportMode,
        request: BookingRequest,
    ) -> Result<&Ticket, BookingError> {
        if let Err(e) = self.check(mode, &request) {
            warn!(
                ticket_id = %request.ticket_id(),
                mode = mode.as_str(),
                error = %e,
                "booking rejected"
            );
            return Err(e);
        }

        let ticket = fares::book(mode, request, &self.distances);
        info!(
            ticket_id = %ticket.id(),
            mode = mode.as_str(),
            origin = ticket.origin().code(),
            destination = ticket.destination().code(),
            price = ticket.price(),
            "reservation added"
        );

        self.ids.insert(ticket.id().clone());
        let list = &mut self.reservations[mode.index()];
        list.push(ticket);
        Ok(&list[list.len() - 1])
    }

    /// Ledger-level checks that must pass before anything is stored.
    fn check(&self, mode: TransportMode, request: &BookingRequest) -> Result<(), BookingError> {
        if self.config.enforce_unique_ids && self.ids.contains(request.ticket_id()) {
            return Err(ValidationError::DuplicateTicketId(request.ticket_id().clone()).into());
        }

        if self.config.reject_unknown_routes
            && !self.distances.contains(request.origin(), request.destination())
        {
            return Err(BookingError::RouteUnknown {
                origin: request.origin(),
                destination: request.destination(),
                mode,
            });
        }

        Ok(())
    }

    /// Every ticket as `(mode, ticket)`, grouped by mode in listing order
    /// and in booking order within each mode.
    ///
    /// The iterator borrows the ledger, so calling this again without an
    /// intervening booking yields the same sequence.
    pub fn list_all(&self) -> impl Iterator<Item = (TransportMode, &Ticket)> + '_ {
        TransportMode::ALL.into_iter().flat_map(move |mode| {
            self.reservations[mode.index()]
                .iter()
                .map(move |ticket| (mode, ticket))
        })
    }

    /// The tickets booked under `mode`, or `None` if there are none.
    pub fn search(&self, mode: TransportMode) -> Option<&[Ticket]> {
        let list = &self.reservations[mode.index()];
        if list.is_empty() {
            None
        } else {
            Some(list.as_slice())
        }
    }

    /// Find a ticket by id, ignoring surrounding whitespace as booking does.
    ///
    /// If ids are not enforced unique, returns the earliest match in
    /// listing order.
    pub fn find(&self, ticket_id: &str) -> Option<&Ticket> {
        let ticket_id = ticket_id.trim();
        self.list_all()
            .map(|(_, ticket)| ticket)
            .find(|ticket| ticket.id().as_str() == ticket_id)
    }

    /// Number of tickets booked under `mode`.
    pub fn count(&self, mode: TransportMode) -> usize {
        self.reservations[mode.index()].len()
    }

    /// Total number of tickets.
    pub fn len(&self) -> usize {
        self.reservations.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.iter().all(Vec::is_empty)
    }

    /// Sum of all ticket prices.
    pub fn total_revenue(&self) -> f64 {
        self.list_all().map(|(_, ticket)| ticket.price()).sum()
    }
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::with_defaults()
    }
}
