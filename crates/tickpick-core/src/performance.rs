//! Multi-horizon percent-change report.
//!
//! For each symbol, four historical series are fetched at fixed
//! (interval, span) pairs and reduced to a percent change between the first
//! bar's open and the last bar's close. Rows are then left-joined with the
//! company facts batch; a symbol without facts still appears with "N/A"
//! fields.

use serde::Serialize;

use crate::broker::{BarsRequest, BrokerData, FundamentalsRequest, QuoteRequest};
use crate::{Fundamentals, Interval, Span, Symbol};

/// Sentinel rendered for any fact or statistic that is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// The four reporting horizons, in column order.
pub const HORIZONS: [(Interval, Span); 4] = [
    (Interval::FiveMinute, Span::Day),
    (Interval::TenMinute, Span::Week),
    (Interval::Hour, Span::Month),
    (Interval::Day, Span::Year),
];

/// Percent change from `open` to `close`.
///
/// Returns `None` when `open` is exactly zero (division guard) or either
/// input is non-finite. Absence is not zero: a missing series must not
/// masquerade as an unchanged price.
pub fn percent_change(open: f64, close: f64) -> Option<f64> {
    if !open.is_finite() || !close.is_finite() || open == 0.0 {
        return None;
    }
    Some((close - open) / open * 100.0)
}

/// Render a large count (market cap, average volume) with a unit suffix.
///
/// Scales to the largest unit >= 1 among T/B/M, two decimal digits; values
/// below one million print as a plain two-decimal number; a missing value
/// prints the "N/A" sentinel.
pub fn format_stat(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return String::from(NOT_AVAILABLE);
    };

    if v >= 1e12 {
        format!("{:.2}T", v / 1e12)
    } else if v >= 1e9 {
        format!("{:.2}B", v / 1e9)
    } else if v >= 1e6 {
        format!("{:.2}M", v / 1e6)
    } else {
        format!("{v:.2}")
    }
}

/// One report row: four horizon changes plus company facts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRow {
    pub symbol: Symbol,
    pub day_change: Option<f64>,
    pub week_change: Option<f64>,
    pub month_change: Option<f64>,
    pub year_change: Option<f64>,
    pub company_name: String,
    pub headquarters: String,
    pub stock_price: Option<f64>,
    pub market_cap: String,
    pub average_volume: String,
    pub pe_ratio: String,
}

/// Report over a symbol list, with per-item failures recorded as warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceReport {
    pub rows: Vec<PerformanceRow>,
    pub warnings: Vec<String>,
}

/// Build the multi-horizon report for `symbols`.
///
/// Every per-symbol collaborator failure is soft: the affected cell goes
/// absent (or "N/A") and a warning is recorded, the batch never aborts.
pub async fn aggregate(broker: &dyn BrokerData, symbols: &[Symbol]) -> PerformanceReport {
    let mut report = PerformanceReport::default();
    if symbols.is_empty() {
        return report;
    }

    let facts = fetch_facts(broker, symbols, &mut report.warnings).await;

    for symbol in symbols {
        let mut changes = [None; 4];
        for (slot, (interval, span)) in HORIZONS.iter().enumerate() {
            let request = BarsRequest::new(symbol.clone(), *interval, *span);
            changes[slot] = match broker.bars(request).await {
                Ok(series) => series_change(&series.bars),
                Err(error) => {
                    report
                        .warnings
                        .push(format!("{symbol} {interval}/{span} bars: {error}"));
                    None
                }
            };
        }

        let stock_price = match broker.quote(QuoteRequest::single(symbol.clone())).await {
            Ok(batch) => batch.quotes.first().map(|quote| quote.last_price),
            Err(error) => {
                report.warnings.push(format!("{symbol} quote: {error}"));
                None
            }
        };

        report
            .rows
            .push(build_row(symbol, changes, stock_price, facts_for(&facts, symbol)));
    }

    report
}

/// Percent change across an ordered bar sequence: first open to last close.
fn series_change(bars: &[crate::Bar]) -> Option<f64> {
    let first = bars.first()?;
    let last = bars.last()?;
    percent_change(first.open, last.close)
}

async fn fetch_facts(
    broker: &dyn BrokerData,
    symbols: &[Symbol],
    warnings: &mut Vec<String>,
) -> Vec<Fundamentals> {
    let request = match FundamentalsRequest::new(symbols.to_vec()) {
        Ok(request) => request,
        Err(error) => {
            warnings.push(format!("fundamentals request: {error}"));
            return Vec::new();
        }
    };

    match broker.fundamentals(request).await {
        Ok(batch) => batch.fundamentals,
        Err(error) => {
            warnings.push(format!("fundamentals: {error}"));
            Vec::new()
        }
    }
}

fn facts_for<'a>(facts: &'a [Fundamentals], symbol: &Symbol) -> Option<&'a Fundamentals> {
    facts.iter().find(|f| &f.symbol == symbol)
}

fn build_row(
    symbol: &Symbol,
    changes: [Option<f64>; 4],
    stock_price: Option<f64>,
    facts: Option<&Fundamentals>,
) -> PerformanceRow {
    let text = |value: Option<&String>| {
        value
            .map(String::to_owned)
            .unwrap_or_else(|| String::from(NOT_AVAILABLE))
    };

    PerformanceRow {
        symbol: symbol.clone(),
        day_change: changes[0],
        week_change: changes[1],
        month_change: changes[2],
        year_change: changes[3],
        company_name: text(facts.and_then(|f| f.name.as_ref())),
        headquarters: text(facts.and_then(|f| f.headquarters.as_ref())),
        stock_price,
        market_cap: format_stat(facts.and_then(|f| f.market_cap)),
        average_volume: format_stat(facts.and_then(|f| f.average_volume)),
        pe_ratio: facts
            .and_then(|f| f.pe_ratio)
            .map(|pe| format!("{pe:.2}"))
            .unwrap_or_else(|| String::from(NOT_AVAILABLE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_basic() {
        let change = percent_change(100.0, 110.0).expect("change should exist");
        assert!((change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_guards_zero_open() {
        assert_eq!(percent_change(0.0, 42.0), None);
        assert_eq!(percent_change(f64::NAN, 42.0), None);
    }

    #[test]
    fn format_stat_scales_units() {
        assert_eq!(format_stat(Some(1.23e12)), "1.23T");
        assert_eq!(format_stat(Some(4.5e9)), "4.50B");
        assert_eq!(format_stat(Some(7.8e6)), "7.80M");
        assert_eq!(format_stat(Some(950_000.0)), "950000.00");
        assert_eq!(format_stat(None), "N/A");
    }

    #[test]
    fn format_stat_unit_boundaries_are_inclusive() {
        assert_eq!(format_stat(Some(1e6)), "1.00M");
        assert_eq!(format_stat(Some(1e9)), "1.00B");
        assert_eq!(format_stat(Some(1e12)), "1.00T");
    }

    #[test]
    fn empty_series_yields_absent_change() {
        assert_eq!(series_change(&[]), None);
    }
}
