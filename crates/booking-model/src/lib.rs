//! Booking record types shared by every stage of the export pipeline.
//!
//! - **booking**: raw (free-text) and normalized (typed) booking records
//! - **money**: currency-tagged decimal amounts and their export rendering
//! - **error**: parse and normalization failures

pub mod booking;
pub mod error;
pub mod money;

pub use booking::{EXPORT_HEADER, NormalizedBooking, RawBooking};
pub use error::{BookingField, DateParseError, NormalizeError, PriceParseError};
pub use money::Money;
