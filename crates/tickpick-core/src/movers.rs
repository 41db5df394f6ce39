//! Sector mover screening and ranking.
//!
//! Takes the brokerage's broad top-movers list, keeps the symbols whose
//! reported sector loosely matches the requested one, re-prices each from a
//! live quote, and ranks by magnitude of change. Per-symbol failures drop
//! the symbol; an unrecognized sector is a soft empty result, not an abort.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::broker::{BrokerData, FundamentalsRequest, QuoteRequest};
use crate::performance::percent_change;
use crate::{Quote, Sector, Symbol};

/// Ranked output is capped at the top ten movers.
pub const MAX_RANKED: usize = 10;

/// A mover that survived sector filtering, carrying its live percent
/// change and the sector text the brokerage reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub symbol: Symbol,
    pub percent_change: f64,
    pub sector: String,
}

/// Screen result: ranked movers plus soft-failure notes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScreenOutcome {
    pub movers: Vec<Mover>,
    pub warnings: Vec<String>,
}

impl ScreenOutcome {
    fn empty_with(warning: String) -> Self {
        Self {
            movers: Vec::new(),
            warnings: vec![warning],
        }
    }
}

/// Live percent change for a quote: last trade against previous close.
/// Absent when the previous close is zero (no divisor, not a zero change).
pub fn quote_percent_change(quote: &Quote) -> Option<f64> {
    percent_change(quote.previous_close, quote.last_price)
}

/// Rank movers by descending magnitude of percent change and keep the top
/// ten. The sort is stable: ties keep their discovery order.
pub fn rank(mut movers: Vec<Mover>) -> Vec<Mover> {
    movers.sort_by(|a, b| {
        b.percent_change
            .abs()
            .partial_cmp(&a.percent_change.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    movers.truncate(MAX_RANKED);
    movers
}

/// Screen the broad movers list down to one sector.
///
/// The requested sector must be one of the twelve recognized names; anything
/// else yields an empty outcome with a warning so the pipeline can carry on
/// with zero candidates. A total top-movers outage is likewise a terminal
/// empty result for this stage.
pub async fn screen_sector(broker: &dyn BrokerData, sector: &str) -> ScreenOutcome {
    let sector = match Sector::from_str(sector) {
        Ok(sector) => sector,
        Err(error) => return ScreenOutcome::empty_with(error.to_string()),
    };

    let raw = match broker.top_movers().await {
        Ok(batch) => batch.movers,
        Err(error) => return ScreenOutcome::empty_with(format!("top movers: {error}")),
    };
    if raw.is_empty() {
        return ScreenOutcome::empty_with(String::from("no market movers found"));
    }

    let mut outcome = ScreenOutcome::default();

    let symbols: Vec<Symbol> = raw.iter().map(|mover| mover.symbol.clone()).collect();
    let facts = match FundamentalsRequest::new(symbols) {
        Ok(request) => match broker.fundamentals(request).await {
            Ok(batch) => batch.fundamentals,
            Err(error) => {
                return ScreenOutcome::empty_with(format!("fundamentals: {error}"));
            }
        },
        Err(error) => return ScreenOutcome::empty_with(error.to_string()),
    };

    let mut survivors = Vec::new();
    for fact in &facts {
        let Some(reported) = fact.sector.as_deref() else {
            continue;
        };
        if !sector.matches_description(reported) {
            continue;
        }

        // Re-price from a live quote; symbols without one drop silently.
        let quote = match broker.quote(QuoteRequest::single(fact.symbol.clone())).await {
            Ok(batch) => batch.quotes.into_iter().next(),
            Err(_) => None,
        };
        let Some(change) = quote.as_ref().and_then(quote_percent_change) else {
            continue;
        };

        survivors.push(Mover {
            symbol: fact.symbol.clone(),
            percent_change: change,
            sector: reported.to_owned(),
        });
    }

    outcome.movers = rank(survivors);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(symbol: &str, change: f64) -> Mover {
        Mover {
            symbol: Symbol::parse(symbol).expect("symbol"),
            percent_change: change,
            sector: String::from("Information Technology"),
        }
    }

    #[test]
    fn ranks_by_absolute_change_descending() {
        let ranked = rank(vec![mover("A", 3.0), mover("B", -7.5), mover("C", 1.0)]);
        let changes: Vec<f64> = ranked.iter().map(|m| m.percent_change).collect();
        assert_eq!(changes, vec![-7.5, 3.0, 1.0]);
    }

    #[test]
    fn caps_output_at_ten() {
        let movers = (0..15)
            .map(|i| mover(&format!("S{i}"), i as f64))
            .collect::<Vec<_>>();
        assert_eq!(rank(movers).len(), MAX_RANKED);
    }

    #[test]
    fn ties_preserve_discovery_order() {
        let ranked = rank(vec![mover("AAA", 2.0), mover("BBB", -2.0), mover("CCC", 2.0)]);
        let symbols: Vec<&str> = ranked.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn quote_change_guards_zero_previous_close() {
        let quote = Quote::new(
            Symbol::parse("IPO").expect("symbol"),
            25.0,
            0.0,
            crate::UtcTimestamp::parse("2026-03-02T15:00:00Z").expect("timestamp"),
        )
        .expect("quote");
        assert_eq!(quote_percent_change(&quote), None);
    }
}
