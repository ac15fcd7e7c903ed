//! Fare booking engine.
//!
//! Prices and books airplane, train and bus tickets between Brazilian
//! states from a fixed distance table, and keeps the booked tickets in a
//! per-mode ledger.

pub mod booking;
pub mod distances;
pub mod domain;
pub mod fares;
pub mod ledger;
pub mod payment;
pub mod report;
