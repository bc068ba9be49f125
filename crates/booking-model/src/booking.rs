use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Column header of the tabular export, in column order.
pub const EXPORT_HEADER: [&str; 6] = [
    "City",
    "Country",
    "Hotel name",
    "Start date",
    "End date",
    "Total price of booking",
];

/// One booking as captured from its source, before any interpretation.
///
/// Every field is free text. `city_text` and `country_text` are explicit
/// overrides for the address heuristic and are usually absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBooking {
    pub hotel_name: String,
    #[serde(default)]
    pub address_text: Option<String>,
    #[serde(default)]
    pub city_text: Option<String>,
    #[serde(default)]
    pub country_text: Option<String>,
    pub start_date_text: String,
    pub end_date_text: String,
    pub total_price_text: String,
}

/// A fully typed booking, ready for export.
///
/// `city` and `country` are empty strings (never absent) when they could
/// not be determined. No ordering between `start_date` and `end_date` is
/// enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBooking {
    pub city: String,
    pub country: String,
    pub hotel_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Money,
}

impl NormalizedBooking {
    /// Export cells in [`EXPORT_HEADER`] order.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.city.clone(),
            self.country.clone(),
            self.hotel_name.clone(),
            self.start_date.format("%Y-%m-%d").to_string(),
            self.end_date.format("%Y-%m-%d").to_string(),
            self.total_price.to_string(),
        ]
    }
}
