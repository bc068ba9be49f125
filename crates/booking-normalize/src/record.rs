//! Booking normalization: one raw record in, one typed record or one error out.

use tracing::{debug, info, warn};

use booking_model::{BookingField, NormalizeError, NormalizedBooking, RawBooking};

use crate::address::extract_city_country;
use crate::date::parse_date;
use crate::price::parse_price;

/// Normalize a single booking.
///
/// Fields are parsed in order start date, end date, total price, and the
/// first failure is returned. No partially normalized booking is ever
/// produced. The hotel name is trimmed and otherwise accepted as-is.
pub fn normalize_booking(raw: &RawBooking) -> Result<NormalizedBooking, NormalizeError> {
    let start_date = parse_date(&raw.start_date_text).map_err(|source| NormalizeError::Date {
        field: BookingField::StartDate,
        source,
    })?;
    let end_date = parse_date(&raw.end_date_text).map_err(|source| NormalizeError::Date {
        field: BookingField::EndDate,
        source,
    })?;
    let price = parse_price(&raw.total_price_text)
        .map_err(|source| NormalizeError::Price { source })?;

    let (city, country) = extract_city_country(
        raw.address_text.as_deref(),
        raw.city_text.as_deref(),
        raw.country_text.as_deref(),
    );

    Ok(NormalizedBooking {
        city,
        country,
        hotel_name: raw.hotel_name.trim().to_string(),
        start_date,
        end_date,
        total_price: price.into(),
    })
}

/// A booking that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Zero-based position in the input batch.
    pub index: usize,
    pub hotel_name: String,
    pub error: NormalizeError,
}

/// Outcome of [`normalize_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Successfully normalized bookings, in input order.
    pub bookings: Vec<NormalizedBooking>,
    /// Skipped bookings, in input order.
    pub failures: Vec<RecordFailure>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.bookings.len() + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Normalize every booking independently.
///
/// A failing booking is recorded in [`BatchOutcome::failures`] and never
/// stops or reorders the rest of the batch.
pub fn normalize_batch<'a, I>(raws: I) -> BatchOutcome
where
    I: IntoIterator<Item = &'a RawBooking>,
{
    let mut outcome = BatchOutcome::default();
    for (index, raw) in raws.into_iter().enumerate() {
        match normalize_booking(raw) {
            Ok(booking) => {
                debug!(index, "booking normalized");
                outcome.bookings.push(booking);
            }
            Err(error) => {
                warn!(index, field = %error.field(), "skipping booking");
                outcome.failures.push(RecordFailure {
                    index,
                    hotel_name: raw.hotel_name.trim().to_string(),
                    error,
                });
            }
        }
    }
    info!(
        normalized = outcome.bookings.len(),
        skipped = outcome.failures.len(),
        "batch normalized"
    );
    outcome
}
