//! Integration tests for booking export.

use std::fs;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use booking_model::{Money, NormalizedBooking};
use booking_output::{
    OutputFormat, write_bookings, write_bookings_csv_to_writer, write_bookings_json_to_writer,
};

fn booking(hotel: &str, city: &str, country: &str, amount: &str, currency: Option<&str>) -> NormalizedBooking {
    NormalizedBooking {
        city: city.to_string(),
        country: country.to_string(),
        hotel_name: hotel.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
        total_price: Money::new(Decimal::from_str(amount).unwrap(), currency.map(String::from)),
    }
}

fn csv_string(bookings: &[NormalizedBooking]) -> String {
    let mut buffer = Vec::new();
    write_bookings_csv_to_writer(&mut buffer, bookings).expect("write csv");
    String::from_utf8(buffer).expect("utf8 csv")
}

#[test]
fn csv_header_and_row() {
    let csv = csv_string(&[booking("Nice Hotel", "Paris", "France", "250.00", Some("EUR"))]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "City,Country,Hotel name,Start date,End date,Total price of booking",
            "Paris,France,Nice Hotel,2024-05-10,2024-05-12,250.00 EUR",
        ]
    );
}

#[test]
fn csv_price_without_currency_is_bare_amount() {
    let csv = csv_string(&[booking("Nice Hotel", "", "", "999.50", None)]);
    assert_eq!(
        csv.lines().nth(1),
        Some(",,Nice Hotel,2024-05-10,2024-05-12,999.50")
    );
}

#[test]
fn csv_quotes_cells_with_commas() {
    let csv = csv_string(&[booking("Hotel, Spa & Suites", "Paris", "France", "1234.56", Some("USD"))]);
    assert_eq!(
        csv.lines().nth(1),
        Some("Paris,France,\"Hotel, Spa & Suites\",2024-05-10,2024-05-12,1234.56 USD")
    );
}

#[test]
fn csv_empty_export_still_has_header() {
    let csv = csv_string(&[]);
    assert_eq!(
        csv,
        "City,Country,Hotel name,Start date,End date,Total price of booking\n"
    );
}

#[test]
fn csv_export_snapshot() {
    let csv = csv_string(&[
        booking("Nice Hotel", "Paris", "France", "250.00", Some("EUR")),
        booking("Mountain View Inn", "Zermatt", "Switzerland", "780", Some("CHF")),
        booking("Harbour Lodge", "", "", "1234.56", None),
    ]);

    insta::assert_snapshot!(csv, @r"
    City,Country,Hotel name,Start date,End date,Total price of booking
    Paris,France,Nice Hotel,2024-05-10,2024-05-12,250.00 EUR
    Zermatt,Switzerland,Mountain View Inn,2024-05-10,2024-05-12,780 CHF
    ,,Harbour Lodge,2024-05-10,2024-05-12,1234.56
    ");
}

#[test]
fn json_export_snapshot() {
    let mut buffer = Vec::new();
    write_bookings_json_to_writer(
        &mut buffer,
        &[booking("Nice Hotel", "Paris", "France", "250.00", Some("EUR"))],
    )
    .expect("write json");
    let json = String::from_utf8(buffer).expect("utf8 json");

    insta::assert_snapshot!(json, @r#"
    [
      {
        "city": "Paris",
        "country": "France",
        "hotel_name": "Nice Hotel",
        "start_date": "2024-05-10",
        "end_date": "2024-05-12",
        "total_price": {
          "amount": "250.00",
          "currency": "EUR"
        }
      }
    ]
    "#);
}

#[test]
fn write_bookings_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out").join("bookings.csv");

    let written = write_bookings(
        &path,
        OutputFormat::Csv,
        &[booking("Nice Hotel", "Paris", "France", "250.00", Some("EUR"))],
    )
    .expect("write bookings");

    assert_eq!(written, path);
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with("Paris,France,Nice Hotel,2024-05-10,2024-05-12,250.00 EUR\n"));
}

#[test]
fn write_bookings_json_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookings.json");
    let bookings = vec![booking("Nice Hotel", "Paris", "France", "250.00", None)];

    write_bookings(&path, OutputFormat::Json, &bookings).expect("write bookings");

    let read: Vec<NormalizedBooking> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(read, bookings);
}
