//! Payment methods and the processor that applies them.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use super::error::{PaymentError, UnsupportedPaymentMethod};

/// How a passenger pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Pix,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Pix,
        PaymentMethod::Cash,
    ];

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::DebitCard => "debit card",
            PaymentMethod::Pix => "pix",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = UnsupportedPaymentMethod;

    /// Accepts the display name, ignoring case, with `-` or `_` in place of
    /// the space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnsupportedPaymentMethod {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proof that a payment went through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: f64,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processing {} payment of amount: R${:.2}",
            self.method, self.amount
        )
    }
}

/// Processes payments with a fixed method.
#[derive(Debug, Clone, Copy)]
pub struct PaymentProcessor {
    method: PaymentMethod,
}

impl PaymentProcessor {
    pub fn new(method: PaymentMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Settle `amount`.
    ///
    /// Zero is accepted, since tickets on unknown routes are free.
    pub fn process(&self, amount: f64) -> Result<PaymentReceipt, PaymentError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PaymentError::InvalidAmount(amount));
        }

        let receipt = PaymentReceipt {
            method: self.method,
            amount,
        };
        info!(method = self.method.as_str(), amount, "payment processed");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_methods() {
        assert_eq!(
            "credit card".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CreditCard)
        );
        assert_eq!(
            "Debit-Card".parse::<PaymentMethod>(),
            Ok(PaymentMethod::DebitCard)
        );
        assert_eq!("PIX".parse::<PaymentMethod>(), Ok(PaymentMethod::Pix));
        assert_eq!(" cash ".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn process_valid_amount() {
        let receipt = PaymentProcessor::new(PaymentMethod::Cash)
            .process(1000.0)
            .unwrap();
        assert_eq!(receipt.method, PaymentMethod::Cash);
        assert_eq!(receipt.amount, 1000.0);
        assert_eq!(
            receipt.to_string(),
            "Processing cash payment of amount: R$1000.00"
        );
    }

    #[test]
    fn process_zero_amount() {
        let receipt = PaymentProcessor::new(PaymentMethod::Pix).process(0.0);
        assert!(receipt.is_ok());
    }

    #[test]
    fn reject_invalid_amounts() {
        let processor = PaymentProcessor::new(PaymentMethod::CreditCard);
        assert_eq!(
            processor.process(-0.01),
            Err(PaymentError::InvalidAmount(-0.01))
        );
        assert!(processor.process(f64::NAN).is_err());
        assert!(processor.process(f64::INFINITY).is_err());
    }

    #[test]
    fn processor_keeps_method() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentProcessor::new(method).method(), method);
        }
    }
}
