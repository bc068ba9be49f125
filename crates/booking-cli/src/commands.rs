use anyhow::{Result, bail};
use tracing::info;

use booking_cli::pipeline::{default_output_path, filter, ingest, normalize, output};
use booking_ingest::InputFormat;
use booking_normalize::{DateRange, extract_city_country, parse_date, parse_price};
use booking_output::OutputFormat;

use crate::cli::{CheckArgs, CheckKind, ConvertArgs, InputFormatArg, OutputFormatArg};
use crate::types::{CheckOutcome, ExportResult};

pub fn run_convert(args: &ConvertArgs) -> Result<ExportResult> {
    let range = DateRange::new(args.from, args.to);
    if range.is_empty() {
        bail!("--from must not be after --to");
    }
    let input_format = match args.input_format {
        InputFormatArg::Auto => InputFormat::Auto,
        InputFormatArg::Csv => InputFormat::Csv,
        InputFormatArg::Json => InputFormat::Json,
    };
    let format = match args.format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    };

    let raws = ingest(&args.input, input_format)?;
    let outcome = normalize(&raws);
    let total = outcome.total();
    let (bookings, filtered_out) = filter(outcome.bookings, &range);

    let output_path = if args.dry_run {
        info!(rows = bookings.len(), "dry run, no output written");
        None
    } else {
        let path = args
            .out
            .clone()
            .unwrap_or_else(|| default_output_path(format));
        Some(output(&path, format, &bookings)?)
    };

    Ok(ExportResult {
        input: args.input.clone(),
        output: output_path,
        format,
        total,
        exported: bookings.len(),
        filtered_out,
        skipped: outcome.failures,
    })
}

pub fn run_check(args: &CheckArgs) -> Vec<CheckOutcome> {
    args.values
        .iter()
        .map(|value| CheckOutcome {
            input: value.clone(),
            result: check_value(args.kind, value),
        })
        .collect()
}

fn check_value(kind: CheckKind, value: &str) -> Result<Vec<(&'static str, String)>, String> {
    match kind {
        CheckKind::Date => parse_date(value)
            .map(|date| vec![("date", date.format("%Y-%m-%d").to_string())])
            .map_err(|error| error.to_string()),
        CheckKind::Price => parse_price(value)
            .map(|price| {
                vec![
                    ("amount", price.amount.to_string()),
                    ("currency", price.currency.unwrap_or_else(|| "-".to_string())),
                ]
            })
            .map_err(|error| error.to_string()),
        CheckKind::Address => {
            let (city, country) = extract_city_country(Some(value), None, None);
            Ok(vec![("city", city), ("country", country)])
        }
    }
}
