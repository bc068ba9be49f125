use std::fmt;

use thiserror::Error;

/// No known date layout matched and no embedded ISO date was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse date from {input:?}")]
pub struct DateParseError {
    pub input: String,
}

/// Failure to read an amount out of a price string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
    #[error("unable to extract numeric price from {input:?}")]
    NoNumericToken { input: String },
    #[error("invalid numeric price {normalized:?} extracted from {input:?}")]
    InvalidAmount { input: String, normalized: String },
}

/// Raw booking fields that can fail to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    StartDate,
    EndDate,
    TotalPrice,
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingField::StartDate => write!(f, "start date"),
            BookingField::EndDate => write!(f, "end date"),
            BookingField::TotalPrice => write!(f, "total price"),
        }
    }
}

/// First field failure encountered while normalizing one booking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("{field}: {source}")]
    Date {
        field: BookingField,
        #[source]
        source: DateParseError,
    },
    #[error("total price: {source}")]
    Price {
        #[source]
        source: PriceParseError,
    },
}

impl NormalizeError {
    pub fn field(&self) -> BookingField {
        match self {
            NormalizeError::Date { field, .. } => *field,
            NormalizeError::Price { .. } => BookingField::TotalPrice,
        }
    }
}
