use serde::{Deserialize, Serialize};

use crate::{Interval, Span, Symbol, UtcTimestamp, ValidationError};

/// Live quote snapshot: last trade against the prior session close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub last_price: f64,
    pub previous_close: f64,
    pub as_of: UtcTimestamp,
}

impl Quote {
    pub fn new(
        symbol: Symbol,
        last_price: f64,
        previous_close: f64,
        as_of: UtcTimestamp,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("last_price", last_price)?;
        validate_non_negative("previous_close", previous_close)?;

        Ok(Self {
            symbol,
            last_price,
            previous_close,
            as_of,
        })
    }
}

/// Single historical bar. Only open and close matter to the pipeline; the
/// brokerage sends more fields and the adapter discards them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub ts: UtcTimestamp,
    pub open: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(ts: UtcTimestamp, open: f64, close: f64) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("close", close)?;

        Ok(Self { ts, open, close })
    }
}

/// Ordered bar sequence for one (symbol, interval, span) request.
///
/// First element is the earliest bar. An empty series means "no data", and
/// callers must treat that as absence, never as a zero change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub symbol: Symbol,
    pub interval: Interval,
    pub span: Span,
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(symbol: Symbol, interval: Interval, span: Span, bars: Vec<Bar>) -> Self {
        Self {
            symbol,
            interval,
            span,
            bars,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Company facts snapshot. Everything is optional: the brokerage omits
/// fields freely and a missing fact renders as "N/A", never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub symbol: Symbol,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub headquarters: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub average_volume: Option<f64>,
}

impl Fundamentals {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            name: None,
            sector: None,
            headquarters: None,
            market_cap: None,
            pe_ratio: None,
            average_volume: None,
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Broad-market mover as reported by the brokerage, before any sector
/// filtering or re-pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    pub symbol: Symbol,
    pub percent_change: f64,
}

/// Trading account snapshot used to derive the default trade budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub cash: f64,
    pub buying_power: f64,
}

impl AccountProfile {
    pub fn new(cash: f64, buying_power: f64) -> Result<Self, ValidationError> {
        validate_non_negative("cash", cash)?;
        validate_non_negative("buying_power", buying_power)?;
        Ok(Self { cash, buying_power })
    }
}

/// Market buy order the pipeline hands to the brokerage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub symbol: Symbol,
    pub quantity: u64,
}

/// Brokerage acknowledgment of a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub symbol: Symbol,
    pub quantity: u64,
    pub state: String,
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_prices() {
        let ts = UtcTimestamp::parse("2026-01-05T15:00:00Z").expect("timestamp");
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let err = Quote::new(symbol, -1.0, 100.0, ts).expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativeValue { .. }));
    }

    #[test]
    fn rejects_non_finite_bar() {
        let ts = UtcTimestamp::parse("2026-01-05T15:00:00Z").expect("timestamp");
        let err = Bar::new(ts, f64::NAN, 10.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { .. }));
    }

    #[test]
    fn empty_series_reports_empty() {
        let symbol = Symbol::parse("MSFT").expect("symbol");
        let series = BarSeries::new(symbol, Interval::Day, Span::Year, Vec::new());
        assert!(series.is_empty());
    }
}
