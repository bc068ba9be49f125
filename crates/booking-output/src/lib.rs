//! Normalized booking export.
//!
//! The CSV layout is a fixed contract: the [`EXPORT_HEADER`] row followed by
//! one row per booking, dates as `YYYY-MM-DD` and the price as
//! `<amount> <CODE>` or a bare `<amount>`.

pub mod csv_output;
pub mod error;
pub mod json_output;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use booking_model::NormalizedBooking;
pub use booking_model::EXPORT_HEADER;

pub use csv_output::{write_bookings_csv, write_bookings_csv_to_writer};
pub use error::{OutputError, Result};
pub use json_output::{write_bookings_json, write_bookings_json_to_writer};

/// Export file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Write `bookings` to `path`, creating missing parent directories.
pub fn write_bookings(
    path: &Path,
    format: OutputFormat,
    bookings: &[NormalizedBooking],
) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    match format {
        OutputFormat::Csv => write_bookings_csv(path, bookings)?,
        OutputFormat::Json => write_bookings_json(path, bookings)?,
    }
    info!(path = %path.display(), rows = bookings.len(), format = format.extension(), "wrote bookings");
    Ok(path.to_path_buf())
}
