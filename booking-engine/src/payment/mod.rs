//! Ticket payment.
//!
//! Settles an amount through one of a closed set of payment methods. Like
//! fare strategies, the methods are a tagged enum rather than separate
//! types, and the processor simply carries the selected method.

mod error;
mod processor;

pub use error::{PaymentError, UnsupportedPaymentMethod};
pub use processor::{PaymentMethod, PaymentProcessor, PaymentReceipt};
