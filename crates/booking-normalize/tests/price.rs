//! Tests for free-text price parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

use booking_model::PriceParseError;
use booking_normalize::{CURRENCY_SYMBOLS, ParsedPrice, parse_price};

fn price(amount: &str, currency: Option<&str>) -> ParsedPrice {
    ParsedPrice {
        amount: Decimal::from_str(amount).unwrap(),
        currency: currency.map(String::from),
    }
}

#[test]
fn us_grouping_with_dollar_sign() {
    assert_eq!(parse_price("$1,234.56"), Ok(price("1234.56", Some("USD"))));
}

#[test]
fn european_grouping_with_euro_sign() {
    assert_eq!(parse_price("€ 1.234,56"), Ok(price("1234.56", Some("EUR"))));
}

#[test]
fn bare_iso_code() {
    let parsed = parse_price("Total: 999 CHF").unwrap();
    assert_eq!(parsed.amount, Decimal::from_str("999.00").unwrap());
    assert_eq!(parsed.currency.as_deref(), Some("CHF"));
}

#[test]
fn single_comma_with_two_digit_tail_is_decimal() {
    assert_eq!(parse_price("999,50"), Ok(price("999.50", None)));
}

#[test]
fn single_comma_with_three_digit_tail_is_grouping() {
    assert_eq!(parse_price("1,234"), Ok(price("1234", None)));
}

#[test]
fn lone_dot_is_always_decimal() {
    assert_eq!(parse_price("1.234"), Ok(price("1.234", None)));
}

#[test]
fn iso_code_before_amount() {
    assert_eq!(
        parse_price("Total EUR 250.00"),
        Ok(price("250.00", Some("EUR")))
    );
}

#[test]
fn amount_keeps_parsed_scale() {
    let parsed = parse_price("Total EUR 250.00").unwrap();
    assert_eq!(parsed.amount.to_string(), "250.00");
}

#[test]
fn prefixed_dollar_variants() {
    assert_eq!(parse_price("CA$ 1,050"), Ok(price("1050", Some("CAD"))));
    assert_eq!(parse_price("A$89.90"), Ok(price("89.90", Some("AUD"))));
    assert_eq!(parse_price("R$ 450,00"), Ok(price("450.00", Some("BRL"))));
}

#[test]
fn trailing_symbols() {
    assert_eq!(parse_price("320,00 zł"), Ok(price("320.00", Some("PLN"))));
    assert_eq!(parse_price("¥12,000"), Ok(price("12000", Some("JPY"))));
}

#[test]
fn space_grouping_is_not_recognized() {
    // Only `.` and `,` group digits; the first space ends the token.
    assert_eq!(parse_price("1 299 ₽"), Ok(price("1", Some("RUB"))));
}

#[test]
fn no_number_fails() {
    assert_eq!(
        parse_price("free of charge"),
        Err(PriceParseError::NoNumericToken {
            input: "free of charge".to_string()
        })
    );
    assert!(matches!(
        parse_price("   "),
        Err(PriceParseError::NoNumericToken { .. })
    ));
}

#[test]
fn unreadable_amount_fails() {
    assert_eq!(
        parse_price("1,234,56"),
        Err(PriceParseError::InvalidAmount {
            input: "1,234,56".to_string(),
            normalized: "1.234.56".to_string(),
        })
    );
}

#[test]
fn amount_beyond_decimal_range_fails() {
    let digits = "123456789012345678901234567890";
    assert_eq!(
        parse_price(digits),
        Err(PriceParseError::InvalidAmount {
            input: digits.to_string(),
            normalized: digits.to_string(),
        })
    );
}

#[test]
fn symbol_table_lists_specific_symbols_first() {
    let position = |symbol: &str| {
        CURRENCY_SYMBOLS
            .iter()
            .position(|(s, _)| *s == symbol)
            .unwrap()
    };
    for specific in ["CA$", "C$", "AU$", "A$", "R$"] {
        assert!(position(specific) < position("$"), "{specific} before $");
    }
    assert!(position("CA$") < position("A$"));
}
