use serde::Serialize;

use tickpick_core::performance::{self, NOT_AVAILABLE};
use tickpick_core::{BrokerData, PerformanceRow, Symbol};

use crate::cli::PerformanceArgs;
use crate::error::CliError;
use crate::output::{self, Table};

use super::CommandResult;

#[derive(Debug, Serialize)]
struct PerformanceResponseData {
    rows: Vec<PerformanceRow>,
}

pub async fn run(
    args: &PerformanceArgs,
    broker: &dyn BrokerData,
) -> Result<CommandResult, CliError> {
    let symbols = args
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let report = performance::aggregate(broker, &symbols).await;
    let table = build_table(&report.rows);

    let mut warnings = report.warnings;
    if let Some(path) = &args.out {
        output::write_csv(path, &table)?;
        warnings.push(format!("report written to {}", path.display()));
    }

    let data = serde_json::to_value(PerformanceResponseData { rows: report.rows })?;

    Ok(CommandResult::ok(data)
        .with_table(table)
        .with_warnings(warnings))
}

fn build_table(rows: &[PerformanceRow]) -> Table {
    let mut table = Table::new(&[
        "symbol",
        "day",
        "week",
        "month",
        "year",
        "company",
        "price",
        "market cap",
        "avg volume",
        "p/e",
        "headquarters",
    ]);

    for row in rows {
        table.push_row(vec![
            row.symbol.to_string(),
            change_cell(row.day_change),
            change_cell(row.week_change),
            change_cell(row.month_change),
            change_cell(row.year_change),
            row.company_name.clone(),
            price_cell(row.stock_price),
            row.market_cap.clone(),
            row.average_volume.clone(),
            row.pe_ratio.clone(),
            row.headquarters.clone(),
        ]);
    }

    table
}

fn change_cell(change: Option<f64>) -> String {
    match change {
        Some(value) => format!("{value:+.2}%"),
        None => String::from(NOT_AVAILABLE),
    }
}

fn price_cell(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("{value:.2}"),
        None => String::from(NOT_AVAILABLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_cells_are_signed_or_not_available() {
        assert_eq!(change_cell(Some(4.567)), "+4.57%");
        assert_eq!(change_cell(Some(-0.5)), "-0.50%");
        assert_eq!(change_cell(None), "N/A");
    }
}
