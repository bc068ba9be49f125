//! Free-text price parsing.
//!
//! A price string yields an optional ISO 4217 currency code and an exact
//! decimal amount. The amount token may use either `,` or `.` as its
//! grouping or decimal separator; [`normalize_separators`] decides which.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use booking_model::{Money, PriceParseError};

/// Currency symbols and the code each one implies, checked in this order.
///
/// Symbols that contain a shorter symbol (`CA$`, `C$`, `AU$`, `A$`, `R$`
/// all contain `$`) come before it, so the first substring hit is always the
/// most specific one.
pub const CURRENCY_SYMBOLS: [(&str, &str); 15] = [
    ("CHF", "CHF"),
    ("CA$", "CAD"),
    ("C$", "CAD"),
    ("AU$", "AUD"),
    ("A$", "AUD"),
    ("R$", "BRL"),
    ("$", "USD"),
    ("€", "EUR"),
    ("£", "GBP"),
    ("₺", "TRY"),
    ("₽", "RUB"),
    ("zł", "PLN"),
    ("₹", "INR"),
    ("¥", "JPY"),
    ("₩", "KRW"),
];

static ISO_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{3})\b").expect("valid ISO code regex"));

/// Result of [`parse_price`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrice {
    pub amount: Decimal,
    pub currency: Option<String>,
}

impl From<ParsedPrice> for Money {
    fn from(price: ParsedPrice) -> Self {
        Money::new(price.amount, price.currency)
    }
}

/// Parse a free-text price into an amount and optional currency code.
///
/// Fails when the text holds no price-shaped number, or when the number
/// cannot be read as a decimal once its separators are normalized.
pub fn parse_price(text: &str) -> Result<ParsedPrice, PriceParseError> {
    let cleaned = text.trim();
    let currency = detect_currency(cleaned).map(str::to_string);

    let token = find_amount_token(cleaned).ok_or_else(|| PriceParseError::NoNumericToken {
        input: text.to_string(),
    })?;
    let normalized = normalize_separators(token);
    let amount =
        Decimal::from_str(&normalized).map_err(|_| PriceParseError::InvalidAmount {
            input: text.to_string(),
            normalized: normalized.clone(),
        })?;

    Ok(ParsedPrice { amount, currency })
}

/// Detect the currency named in a price string.
///
/// A standalone three-letter uppercase word wins over any symbol; otherwise
/// the first entry of [`CURRENCY_SYMBOLS`] found as a substring decides.
pub fn detect_currency(text: &str) -> Option<&str> {
    if let Some(captures) = ISO_CODE.captures(text) {
        return captures.get(1).map(|m| m.as_str());
    }
    CURRENCY_SYMBOLS
        .iter()
        .find(|(symbol, _)| text.contains(symbol))
        .map(|(_, code)| *code)
}

/// Locate the first price-shaped number.
///
/// A token is either 1-3 digits followed by one or more `[.,]ddd` groups,
/// or a plain digit run; either form may end with a `[.,]dd` fraction. The
/// token never starts or ends next to another digit. Grouped forms are
/// preferred, longest first, falling back to shorter alternatives exactly
/// like a backtracking regex would.
fn find_amount_token(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .filter(|&start| is_digit_at(bytes, start) && !(start > 0 && is_digit_at(bytes, start - 1)))
        .find_map(|start| match_amount_at(bytes, start).map(|end| &text[start..end]))
}

fn match_amount_at(bytes: &[u8], start: usize) -> Option<usize> {
    let run_end = digit_run_end(bytes, start);

    if run_end - start <= 3 {
        let mut group_ends = Vec::new();
        let mut pos = run_end;
        while is_separator_at(bytes, pos) && (1..=3).all(|offset| is_digit_at(bytes, pos + offset))
        {
            pos += 4;
            group_ends.push(pos);
        }
        if let Some(end) = group_ends
            .iter()
            .rev()
            .find_map(|&end| fraction_end(bytes, end))
        {
            return Some(end);
        }
    }

    fraction_end(bytes, run_end)
}

/// Accept an optional two-digit fraction at `pos`, then require that the
/// token is not followed by a digit.
fn fraction_end(bytes: &[u8], pos: usize) -> Option<usize> {
    if is_separator_at(bytes, pos)
        && is_digit_at(bytes, pos + 1)
        && is_digit_at(bytes, pos + 2)
        && !is_digit_at(bytes, pos + 3)
    {
        return Some(pos + 3);
    }
    (!is_digit_at(bytes, pos)).then_some(pos)
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while is_digit_at(bytes, end) {
        end += 1;
    }
    end
}

fn is_digit_at(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos).is_some_and(u8::is_ascii_digit)
}

fn is_separator_at(bytes: &[u8], pos: usize) -> bool {
    matches!(bytes.get(pos), Some(b'.' | b','))
}

/// Rewrite an amount token so `.` is the only (decimal) separator.
///
/// - Both `.` and `,`: the one occurring last is the decimal separator and
///   the other is stripped.
/// - Only `,`: all commas are grouping when every segment is numeric and the
///   last segment has exactly three digits (`1,234`); otherwise commas become
///   decimal points (`999,50`).
/// - Only `.` or neither: unchanged.
pub(crate) fn normalize_separators(token: &str) -> String {
    match (token.rfind(','), token.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => token.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => token.replace(',', ""),
        (Some(_), None) => {
            let parts: Vec<&str> = token.split(',').collect();
            let last_is_group = parts.last().is_some_and(|last| last.len() == 3);
            let all_numeric = parts
                .iter()
                .all(|part| part.bytes().all(|b| b.is_ascii_digit()));
            if parts.len() >= 2 && last_is_group && all_numeric {
                parts.concat()
            } else {
                token.replace(',', ".")
            }
        }
        (None, _) => token.to_string(),
    }
}
