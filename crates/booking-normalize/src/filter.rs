//! Start-date range filtering.

use chrono::NaiveDate;

use booking_model::NormalizedBooking;

/// Inclusive date range; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// True when the bounds cannot contain any date.
    pub fn is_empty(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Keep bookings whose start date lies in `range`, preserving order.
pub fn filter_by_start_date(
    bookings: Vec<NormalizedBooking>,
    range: &DateRange,
) -> Vec<NormalizedBooking> {
    if range.is_unbounded() {
        return bookings;
    }
    bookings
        .into_iter()
        .filter(|booking| range.contains(booking.start_date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(Some(day(10)), Some(day(12)));
        assert!(!range.contains(day(9)));
        assert!(range.contains(day(10)));
        assert!(range.contains(day(12)));
        assert!(!range.contains(day(13)));
    }

    #[test]
    fn test_open_sides() {
        assert!(DateRange::new(None, Some(day(12))).contains(day(1)));
        assert!(DateRange::new(Some(day(10)), None).contains(day(31)));
        assert!(DateRange::default().contains(day(1)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(DateRange::new(Some(day(12)), Some(day(10))).is_empty());
        assert!(!DateRange::new(Some(day(10)), Some(day(10))).is_empty());
        assert!(!DateRange::default().is_empty());
    }
}
