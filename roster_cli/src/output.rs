use anyhow::Result;
use roster_lib::{PageMetadata, ShapedRecord};
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

// -- Row builders --

/// Column names in first-seen order across all records.
fn build_header(records: &[ShapedRecord]) -> Vec<String> {
    let mut header: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !header.iter().any(|h| h == key) {
                header.push(key.to_string());
            }
        }
    }
    header
}

/// One row of display strings per record; missing attributes render empty.
fn build_rows(records: &[ShapedRecord], header: &[String]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            header
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .map(|value| value.to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}

fn build_table(records: &[ShapedRecord]) -> Table {
    let header = build_header(records);
    let rows = build_rows(records, &header);
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    builder.build()
}

// -- Record output --

pub fn print_records(records: &[ShapedRecord], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", build_table(records)),
        OutputFormat::Markdown => {
            let mut table = build_table(records);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&records),
    }
}

pub fn print_record(record: &ShapedRecord, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(record),
        _ => print_records(std::slice::from_ref(record), format),
    }
}

/// Writes the pagination metadata to stderr the way it would travel in an
/// `X-Pagination` response header.
pub fn print_pagination(meta: &PageMetadata) -> Result<()> {
    eprintln!("{}", pagination_header(meta)?);
    Ok(())
}

fn pagination_header(meta: &PageMetadata) -> Result<String> {
    Ok(format!("X-Pagination: {}", serde_json::to_string(meta)?))
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
