//! Normalization engine for free-text booking records.
//!
//! - **date**: ordered date layouts with an embedded ISO fallback
//! - **price**: currency detection and separator disambiguation
//! - **address**: city/country resolution from free-text addresses
//! - **record**: per-booking and batch normalization
//! - **filter**: inclusive start-date range filtering
//!
//! Every function here is pure; batches can be split across threads freely.

pub mod address;
pub mod date;
pub mod filter;
pub mod price;
pub mod record;

pub use address::extract_city_country;
pub use date::{DATE_FORMATS, parse_date};
pub use filter::{DateRange, filter_by_start_date};
pub use price::{CURRENCY_SYMBOLS, ParsedPrice, detect_currency, parse_price};
pub use record::{BatchOutcome, RecordFailure, normalize_batch, normalize_booking};
