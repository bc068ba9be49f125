use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use booking_normalize::CURRENCY_SYMBOLS;

use crate::types::{CheckOutcome, ExportResult};

pub fn print_summary(result: &ExportResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {} ({})", path.display(), result.format.extension()),
        None => println!("Output: none (dry run)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Read"),
        header_cell("Exported"),
        header_cell("Outside range"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.total).add_attribute(Attribute::Bold),
        count_cell(result.exported, Color::Green),
        count_cell(result.filtered_out, Color::Yellow),
        count_cell(result.skipped.len(), Color::Red),
    ]);
    println!("{table}");
    print_skipped_table(result);
}

fn print_skipped_table(result: &ExportResult) {
    if result.skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Hotel"),
        header_cell("Field"),
        header_cell("Reason"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in &result.skipped {
        table.add_row(vec![
            Cell::new(failure.index + 1),
            Cell::new(&failure.hotel_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(failure.error.field()).fg(Color::Red),
            Cell::new(failure.error.to_string()),
        ]);
    }
    println!();
    println!("Skipped:");
    println!("{table}");
}

pub fn print_check(outcomes: &[CheckOutcome]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Input"), header_cell("Result")]);
    apply_detail_table_style(&mut table);
    for outcome in outcomes {
        let result = match &outcome.result {
            Ok(fields) => {
                let rendered = fields
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                Cell::new(rendered).fg(Color::Green)
            }
            Err(message) => Cell::new(message).fg(Color::Red),
        };
        table.add_row(vec![Cell::new(&outcome.input), result]);
    }
    println!("{table}");
}

pub fn print_currencies() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Symbol"),
        header_cell("Code"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for (index, (symbol, code)) in CURRENCY_SYMBOLS.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(symbol).add_attribute(Attribute::Bold),
            Cell::new(code).fg(Color::Blue),
        ]);
    }
    println!("{table}");
    println!("A standalone three-letter uppercase code takes precedence over any symbol.");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() == 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(13)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
