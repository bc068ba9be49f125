//! Integration tests for the export pipeline stages.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use booking_cli::logging::{REDACTED_VALUE, redact_value};
use booking_cli::pipeline::{default_output_path, filter, ingest, normalize, output};
use booking_ingest::InputFormat;
use booking_model::BookingField;
use booking_normalize::DateRange;
use booking_output::OutputFormat;

const BOOKINGS_CSV: &str = "\
hotel_name,address_text,city_text,country_text,start_date_text,end_date_text,total_price_text
Hotel Sunshine,\"Rua Augusta 1, Lisbon, Portugal\",,,Check-in: 2023-09-01,Check-out: 2023-09-05,\"Total: € 450,00\"
Mountain View Inn,,Zermatt,Switzerland,\"Sep 10, 2022\",\"Sep 12, 2022\",Total: CHF 780
Harbour Lodge,,Oslo,Norway,2023-10-01,2023-10-03,call for rates
";

fn write_input(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("bookings.csv");
    fs::write(&path, BOOKINGS_CSV).unwrap();
    path
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_default_output_path_follows_format() {
    assert_eq!(
        default_output_path(OutputFormat::Csv),
        PathBuf::from("./bookings.csv")
    );
    assert_eq!(
        default_output_path(OutputFormat::Json),
        PathBuf::from("./bookings.json")
    );
}

#[test]
fn test_normalize_collects_failures_without_aborting() {
    let dir = TempDir::new().unwrap();
    let raws = ingest(&write_input(&dir), InputFormat::Auto).unwrap();
    assert_eq!(raws.len(), 3);

    let outcome = normalize(&raws);

    assert_eq!(outcome.total(), 3);
    assert_eq!(outcome.bookings.len(), 2);
    assert_eq!(outcome.bookings[0].hotel_name, "Hotel Sunshine");
    assert_eq!(outcome.bookings[1].hotel_name, "Mountain View Inn");
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].index, 2);
    assert_eq!(outcome.failures[0].hotel_name, "Harbour Lodge");
    assert_eq!(outcome.failures[0].error.field(), BookingField::TotalPrice);
}

#[test]
fn test_end_to_end_csv_export() {
    let dir = TempDir::new().unwrap();
    let raws = ingest(&write_input(&dir), InputFormat::Csv).unwrap();
    let outcome = normalize(&raws);
    let (bookings, dropped) = filter(outcome.bookings, &DateRange::default());
    assert_eq!(dropped, 0);

    let target = dir.path().join("out").join("bookings.csv");
    let written = output(&target, OutputFormat::Csv, &bookings).unwrap();

    assert_eq!(written, target);
    let content = fs::read_to_string(&target).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "City,Country,Hotel name,Start date,End date,Total price of booking",
            "Lisbon,Portugal,Hotel Sunshine,2023-09-01,2023-09-05,450.00 EUR",
            "Zermatt,Switzerland,Mountain View Inn,2022-09-10,2022-09-12,780 CHF",
        ]
    );
}

#[test]
fn test_filter_reports_dropped_count() {
    let dir = TempDir::new().unwrap();
    let raws = ingest(&write_input(&dir), InputFormat::Auto).unwrap();
    let outcome = normalize(&raws);
    let range = DateRange::new(Some(date(2023, 1, 1)), None);

    let (bookings, dropped) = filter(outcome.bookings, &range);

    assert_eq!(dropped, 1);
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].hotel_name, "Hotel Sunshine");
}

#[test]
fn test_ingest_missing_file_has_context() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");

    let error = ingest(&missing, InputFormat::Auto).unwrap_err();

    assert!(error.to_string().contains("load bookings"));
}

#[test]
fn test_values_redacted_by_default() {
    assert_eq!(redact_value("Hotel Sunshine"), REDACTED_VALUE);
}
