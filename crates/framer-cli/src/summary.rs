use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use framer_cli::types::{MigrationResult, TableSummary};

pub fn print_summary(result: &MigrationResult) {
    println!("Schema: {}", result.schema);
    println!("Source: {}", result.source);
    match &result.output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: dry run, nothing written"),
    }
    println!(
        "Customers: {} loaded, {} migrated",
        result.loaded.customers, result.kept.customers
    );
    println!(
        "Orders: {} loaded, {} migrated",
        result.loaded.orders, result.kept.orders
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Unmapped"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut total_records = 0usize;
    let mut total_unmapped = 0usize;
    for summary in &result.tables {
        total_records += summary.records;
        total_unmapped += summary.unmapped_total();
        table.add_row(vec![
            table_cell(&summary.name),
            source_cell(&summary.source_tables),
            Cell::new(summary.records),
            Cell::new(summary.columns),
            count_cell(summary.unmapped_total(), Color::Yellow),
            output_cell(summary.output.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total_unmapped, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_unmapped_table(&result.tables);
}

fn print_unmapped_table(tables: &[TableSummary]) {
    let rows: Vec<(&str, &str, usize)> = tables
        .iter()
        .flat_map(|summary| {
            summary
                .unmapped
                .iter()
                .map(|(column, count)| (summary.name.as_str(), column.as_str(), *count))
        })
        .collect();
    if rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Column"),
        header_cell("Unmapped"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (name, column, count) in rows {
        table.add_row(vec![
            table_cell(name),
            Cell::new(column),
            count_cell(count, Color::Yellow),
        ]);
    }
    println!();
    println!("Unmapped values:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(name: &str) -> Cell {
    if name.starts_with("Legacy") {
        Cell::new(name).fg(Color::DarkGrey)
    } else {
        Cell::new(name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn source_cell(sources: &[String]) -> Cell {
    if sources.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(sources.join(", "))
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(
            path.file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned()),
        )
        .fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
