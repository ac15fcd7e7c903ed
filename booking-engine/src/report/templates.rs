//! Askama text templates for human-readable output.

use askama::Template;

use crate::domain::{Ticket, TransportMode};
use crate::ledger::ReservationLedger;

// ============================================================================
// Templates
// ============================================================================

/// Message shown right after a ticket is booked.
#[derive(Template)]
#[template(path = "booking_confirmation.txt")]
pub struct BookingConfirmationTemplate {
    pub headline: &'static str,
    pub ticket: TicketView,
}

impl BookingConfirmationTemplate {
    pub fn new(ticket: &Ticket) -> Self {
        Self {
            headline: super::CONFIRMATION_HEADLINE,
            ticket: TicketView::from_ticket(ticket),
        }
    }
}

/// Details of a single ticket.
#[derive(Template)]
#[template(path = "ticket_info.txt")]
pub struct TicketInfoTemplate {
    pub ticket: TicketView,
}

impl TicketInfoTemplate {
    pub fn new(ticket: &Ticket) -> Self {
        Self {
            ticket: TicketView::from_ticket(ticket),
        }
    }
}

/// Reservations grouped by mode, one header per group.
///
/// A group with no tickets renders as a "no reservations" line.
#[derive(Template)]
#[template(path = "reservation_list.txt")]
pub struct ReservationListTemplate {
    pub groups: Vec<ModeGroupView>,
}

impl ReservationListTemplate {
    /// Every mode that has at least one ticket.
    pub fn listing(ledger: &ReservationLedger) -> Self {
        let groups = TransportMode::ALL
            .into_iter()
            .filter(|mode| ledger.count(*mode) > 0)
            .map(|mode| ModeGroupView::from_ledger(ledger, mode))
            .collect();
        Self { groups }
    }

    /// A single mode, which may be empty.
    pub fn search(ledger: &ReservationLedger, mode: TransportMode) -> Self {
        Self {
            groups: vec![ModeGroupView::from_ledger(ledger, mode)],
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Ticket view model for templates.
#[derive(Debug, Clone)]
pub struct TicketView {
    pub id: String,
    pub passenger: String,
    pub origin: String,
    pub destination: String,
    pub mode: String,

    /// Price with two decimal places
    pub price: String,
}

impl TicketView {
    /// Create from a domain Ticket.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id().to_string(),
            passenger: ticket.passenger_name().to_string(),
            origin: ticket.origin().name().to_string(),
            destination: ticket.destination().name().to_string(),
            mode: ticket.mode().as_str().to_string(),
            price: format!("{:.2}", ticket.price()),
        }
    }
}

/// One mode's tickets.
#[derive(Debug, Clone)]
pub struct ModeGroupView {
    pub mode: String,
    pub tickets: Vec<TicketView>,
}

impl ModeGroupView {
    fn from_ledger(ledger: &ReservationLedger, mode: TransportMode) -> Self {
        let tickets = ledger
            .search(mode)
            .unwrap_or_default()
            .iter()
            .map(TicketView::from_ticket)
            .collect();
        Self {
            mode: mode.as_str().to_string(),
            tickets,
        }
    }
}
