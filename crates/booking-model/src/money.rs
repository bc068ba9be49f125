use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A decimal amount with an optional ISO 4217 currency code.
///
/// `currency` is `None` when no currency signal was found in the source
/// text. Rendering never substitutes a placeholder for a missing code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: Option<String>,
}

impl Money {
    pub fn new(amount: Decimal, currency: Option<String>) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.currency {
            Some(code) => write!(f, "{} {code}", self.amount),
            None => write!(f, "{}", self.amount),
        }
    }
}
