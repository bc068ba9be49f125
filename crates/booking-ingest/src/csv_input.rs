//! CSV booking import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use booking_model::RawBooking;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    HotelName,
    Address,
    City,
    Country,
    StartDate,
    EndDate,
    TotalPrice,
}

/// Normalized header name to column. Several spellings map to each column.
const COLUMN_ALIASES: [(&str, Column); 20] = [
    ("hotel_name", Column::HotelName),
    ("hotel", Column::HotelName),
    ("address_text", Column::Address),
    ("address", Column::Address),
    ("city_text", Column::City),
    ("city", Column::City),
    ("country_text", Column::Country),
    ("country", Column::Country),
    ("start_date_text", Column::StartDate),
    ("start_date", Column::StartDate),
    ("check_in", Column::StartDate),
    ("checkin", Column::StartDate),
    ("end_date_text", Column::EndDate),
    ("end_date", Column::EndDate),
    ("check_out", Column::EndDate),
    ("checkout", Column::EndDate),
    ("total_price_text", Column::TotalPrice),
    ("total_price", Column::TotalPrice),
    ("total_price_of_booking", Column::TotalPrice),
    ("price", Column::TotalPrice),
];

#[derive(Debug, Default)]
struct ColumnIndex {
    hotel_name: Option<usize>,
    address: Option<usize>,
    city: Option<usize>,
    country: Option<usize>,
    start_date: Option<usize>,
    end_date: Option<usize>,
    total_price: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut index = ColumnIndex::default();
        for (position, header) in headers.iter().enumerate() {
            let normalized = normalize_header(header);
            let Some((_, column)) = COLUMN_ALIASES
                .iter()
                .find(|(alias, _)| *alias == normalized)
            else {
                debug!(header, "ignoring unknown column");
                continue;
            };
            let slot = match column {
                Column::HotelName => &mut index.hotel_name,
                Column::Address => &mut index.address,
                Column::City => &mut index.city,
                Column::Country => &mut index.country,
                Column::StartDate => &mut index.start_date,
                Column::EndDate => &mut index.end_date,
                Column::TotalPrice => &mut index.total_price,
            };
            // First matching header wins.
            slot.get_or_insert(position);
        }
        index
    }
}

/// `" Hotel-Name "` -> `"hotel_name"`.
fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn required(index: Option<usize>, column: &'static str, path: &Path) -> Result<usize> {
    index.ok_or_else(|| IngestError::MissingColumn {
        column,
        path: path.to_path_buf(),
    })
}

fn cell(record: &StringRecord, index: usize) -> String {
    record
        .get(index)
        .unwrap_or_default()
        .trim_matches('\u{feff}')
        .to_string()
}

fn optional_cell(record: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .map(|idx| cell(record, idx))
        .filter(|value| !value.trim().is_empty())
}

/// Read raw bookings from a CSV file.
pub fn read_bookings_csv(path: &Path) -> Result<Vec<RawBooking>> {
    let file = File::open(path).map_err(|source| IngestError::open(path, source))?;
    read_bookings_csv_from_reader(file, path)
}

/// Read raw bookings from any CSV source; `path` only labels errors.
pub fn read_bookings_csv_from_reader<R: Read>(reader: R, path: &Path) -> Result<Vec<RawBooking>> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers);
    let hotel_name = required(columns.hotel_name, "hotel_name", path)?;
    let start_date = required(columns.start_date, "start_date_text", path)?;
    let end_date = required(columns.end_date, "end_date_text", path)?;
    let total_price = required(columns.total_price, "total_price_text", path)?;

    let mut bookings = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) if matches!(error.kind(), csv::ErrorKind::Utf8 { .. }) => {
                let line = error.position().map(csv::Position::line);
                warn!(path = %path.display(), line, %error, "skipping unreadable row");
                continue;
            }
            Err(error) => return Err(csv_error(error)),
        };
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        bookings.push(RawBooking {
            hotel_name: cell(&record, hotel_name),
            address_text: optional_cell(&record, columns.address),
            city_text: optional_cell(&record, columns.city),
            country_text: optional_cell(&record, columns.country),
            start_date_text: cell(&record, start_date),
            end_date_text: cell(&record, end_date),
            total_price_text: cell(&record, total_price),
        });
    }
    Ok(bookings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Hotel name "), "hotel_name");
        assert_eq!(normalize_header("\u{feff}HOTEL-NAME"), "hotel_name");
        assert_eq!(normalize_header("start_date_text"), "start_date_text");
        assert_eq!(normalize_header("Total price of booking"), "total_price_of_booking");
        assert_eq!(normalize_header("Check-In"), "check_in");
    }

    #[test]
    fn test_column_index_first_alias_wins() {
        let headers = StringRecord::from(vec!["price", "hotel", "total_price"]);
        let index = ColumnIndex::from_headers(&headers);
        assert_eq!(index.total_price, Some(0));
        assert_eq!(index.hotel_name, Some(1));
        assert_eq!(index.address, None);
    }
}
