use std::path::PathBuf;

use booking_normalize::RecordFailure;
use booking_output::OutputFormat;

#[derive(Debug)]
pub struct ExportResult {
    pub input: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub total: usize,
    pub exported: usize,
    /// Normalized bookings dropped by the date range.
    pub filtered_out: usize,
    pub skipped: Vec<RecordFailure>,
}

impl ExportResult {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// One row of `check` output.
#[derive(Debug)]
pub struct CheckOutcome {
    pub input: String,
    pub result: Result<Vec<(&'static str, String)>, String>,
}
