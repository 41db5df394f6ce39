//! Output rendering: JSON to stdout, ASCII tables, CSV export.

use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Tabular projection of a command result, used for `--format table` and
/// CSV export. JSON output ignores it and serializes the full data value.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

pub fn render(
    data: &Value,
    table: Option<&Table>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            println!("{rendered}");
        }
        OutputFormat::Table => match table {
            Some(table) => print!("{}", format_table(table)),
            None => println!("{}", serde_json::to_string_pretty(data)?),
        },
    }
    Ok(())
}

pub fn render_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

fn format_table(table: &Table) -> String {
    let mut widths: Vec<usize> = table.headers.iter().map(String::len).collect();
    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() && cell.len() > widths[index] {
                widths[index] = cell.len();
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &table.headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &table.rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(rendered.join("  ").trim_end());
    out.push('\n');
}

/// Write the table as CSV. Fields containing commas, quotes, or newlines
/// are quoted with doubled inner quotes.
pub fn write_csv(path: &Path, table: &Table) -> Result<(), CliError> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", csv_line(&table.headers))?;
    for row in &table.rows {
        writeln!(file, "{}", csv_line(row))?;
    }
    Ok(())
}

fn csv_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| csv_field(cell))
        .collect::<Vec<_>>()
        .join(",")
}

fn csv_field(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(&["symbol", "change"]);
        table.push_row(vec![String::from("AAPL"), String::from("1.20")]);
        table.push_row(vec![String::from("NVDA"), String::from("-6.40")]);
        table
    }

    #[test]
    fn table_columns_align_to_widest_cell() {
        let rendered = format_table(&sample());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "symbol  change");
        assert_eq!(lines[1], "------  ------");
        assert_eq!(lines[2], "AAPL    1.20");
    }

    #[test]
    fn csv_quotes_embedded_commas() {
        assert_eq!(csv_field("Cupertino, CA"), "\"Cupertino, CA\"");
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_export_round_trips_through_filesystem() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.csv");
        write_csv(&path, &sample()).expect("write should succeed");

        let contents = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "symbol,change");
        assert_eq!(lines[1], "AAPL,1.20");
        assert_eq!(lines.len(), 3);
    }
}
