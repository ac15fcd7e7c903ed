//! Payment error types.

/// Errors that can occur when processing a payment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    /// Amount was negative, NaN or infinite
    #[error("invalid payment amount: {0}")]
    InvalidAmount(f64),
}

/// Error returned when a payment method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported payment method: {name:?}")]
pub struct UnsupportedPaymentMethod {
    pub(super) name: String,
}
