//! Raw booking import.
//!
//! Bookings arrive as CSV (one booking per row, header required) or as a
//! JSON array of raw booking objects. Input order is preserved.

pub mod csv_input;
pub mod error;
pub mod json_input;

use std::path::Path;

use booking_model::RawBooking;
use tracing::info;

pub use csv_input::{read_bookings_csv, read_bookings_csv_from_reader};
pub use error::{IngestError, Result};
pub use json_input::{read_bookings_json, read_bookings_json_from_reader};

/// Source file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Decide from the file extension (`.json` is JSON, anything else CSV).
    #[default]
    Auto,
    Csv,
    Json,
}

impl InputFormat {
    /// Resolve [`InputFormat::Auto`] against a concrete path.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    InputFormat::Json
                } else {
                    InputFormat::Csv
                }
            }
            other => other,
        }
    }
}

/// Load raw bookings from `path`.
pub fn load_bookings(path: &Path, format: InputFormat) -> Result<Vec<RawBooking>> {
    let bookings = match format.resolve(path) {
        InputFormat::Json => read_bookings_json(path)?,
        _ => read_bookings_csv(path)?,
    };
    info!(path = %path.display(), count = bookings.len(), "loaded raw bookings");
    Ok(bookings)
}
