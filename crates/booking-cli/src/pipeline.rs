//! Export pipeline stages: ingest, normalize, filter, output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use booking_ingest::{InputFormat, load_bookings};
use booking_model::{NormalizedBooking, RawBooking};
use booking_normalize::{BatchOutcome, DateRange, filter_by_start_date, normalize_batch};
use booking_output::{OutputFormat, write_bookings};

use crate::logging::redact_value;

/// Default output path for `format` in the working directory.
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("./bookings.{}", format.extension()))
}

/// Load raw bookings from `path`.
pub fn ingest(path: &Path, format: InputFormat) -> Result<Vec<RawBooking>> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let raws = load_bookings(path, format)
        .with_context(|| format!("load bookings: {}", path.display()))?;
    for (index, raw) in raws.iter().enumerate() {
        trace!(
            index,
            hotel = redact_value(&raw.hotel_name),
            start = redact_value(&raw.start_date_text),
            end = redact_value(&raw.end_date_text),
            price = redact_value(&raw.total_price_text),
            "raw booking"
        );
    }
    info!(
        count = raws.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(raws)
}

/// Normalize every raw booking; failures are collected, never fatal.
pub fn normalize(raws: &[RawBooking]) -> BatchOutcome {
    let span = info_span!("normalize", count = raws.len());
    let _guard = span.enter();
    let outcome = normalize_batch(raws);
    for failure in &outcome.failures {
        let reason = failure.error.to_string();
        debug!(
            index = failure.index,
            hotel = redact_value(&failure.hotel_name),
            reason = redact_value(&reason),
            "skip detail"
        );
    }
    outcome
}

/// Apply the start-date range. Returns the kept bookings and how many were
/// dropped.
pub fn filter(bookings: Vec<NormalizedBooking>, range: &DateRange) -> (Vec<NormalizedBooking>, usize) {
    let before = bookings.len();
    let kept = filter_by_start_date(bookings, range);
    let dropped = before - kept.len();
    debug!(
        from = ?range.from,
        to = ?range.to,
        kept = kept.len(),
        dropped,
        "date filter applied"
    );
    (kept, dropped)
}

/// Write bookings to `path`.
pub fn output(path: &Path, format: OutputFormat, bookings: &[NormalizedBooking]) -> Result<PathBuf> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();
    write_bookings(path, format, bookings)
        .with_context(|| format!("write bookings: {}", path.display()))
}
