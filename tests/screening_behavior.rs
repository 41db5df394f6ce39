//! Behavioral tests for the sector screening stage.
//!
//! These verify HOW the screener copes with messy brokerage data: loose
//! sector taxonomies, symbols without quotes, and unknown sector names.

use tickpick_core::movers;

use tickpick_tests::ScriptedBroker;

#[tokio::test]
async fn when_sector_matches_loosely_symbols_are_kept_and_ranked() {
    // "Information Technology" must catch a provider that reports
    // "Technology Hardware" on a word-subset basis.
    let broker = ScriptedBroker::new()
        .with_mover("AAPL", 1.2)
        .with_mover("NVDA", 6.4)
        .with_mover("XOM", 5.8)
        .with_sector_facts("AAPL", "Technology Hardware")
        .with_sector_facts("NVDA", "Information Technology")
        .with_sector_facts("XOM", "Energy")
        .with_quote("AAPL", 101.2, 100.0)
        .with_quote("NVDA", 93.6, 100.0)
        .with_quote("XOM", 105.8, 100.0);

    let outcome = movers::screen_sector(&broker, "Information Technology").await;

    let symbols: Vec<&str> = outcome
        .movers
        .iter()
        .map(|m| m.symbol.as_str())
        .collect();
    // NVDA's live change (-6.4%) outranks AAPL's (+1.2%) by magnitude;
    // XOM is filtered out despite its larger move.
    assert_eq!(symbols, vec!["NVDA", "AAPL"]);
    assert!(outcome.warnings.is_empty());
}

#[tokio::test]
async fn when_symbol_has_no_quote_it_drops_silently() {
    let broker = ScriptedBroker::new()
        .with_mover("XOM", 5.8)
        .with_mover("CVX", -2.2)
        .with_sector_facts("XOM", "Energy")
        .with_sector_facts("CVX", "Energy")
        .with_quote("XOM", 105.8, 100.0);

    let outcome = movers::screen_sector(&broker, "Energy").await;

    let symbols: Vec<&str> = outcome
        .movers
        .iter()
        .map(|m| m.symbol.as_str())
        .collect();
    assert_eq!(symbols, vec!["XOM"]);
}

#[tokio::test]
async fn when_quote_has_zero_previous_close_symbol_drops() {
    // A fresh listing with no prior close has no computable change;
    // absence must not masquerade as a 0% move.
    let broker = ScriptedBroker::new()
        .with_mover("IPO", 3.0)
        .with_sector_facts("IPO", "Energy")
        .with_quote("IPO", 25.0, 0.0);

    let outcome = movers::screen_sector(&broker, "Energy").await;
    assert!(outcome.movers.is_empty());
}

#[tokio::test]
async fn when_sector_is_unrecognized_result_is_empty_with_warning() {
    let broker = ScriptedBroker::new()
        .with_mover("AAPL", 1.2)
        .with_sector_facts("AAPL", "Information Technology")
        .with_quote("AAPL", 101.2, 100.0);

    let outcome = movers::screen_sector(&broker, "Cryptocurrencies").await;

    assert!(outcome.movers.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(
        outcome.warnings[0].contains("Cryptocurrencies"),
        "warning should name the rejected sector: {}",
        outcome.warnings[0]
    );
}

#[tokio::test]
async fn when_no_movers_exist_result_is_empty_with_warning() {
    let broker = ScriptedBroker::new();
    let outcome = movers::screen_sector(&broker, "Energy").await;

    assert!(outcome.movers.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
}

#[tokio::test]
async fn when_more_than_ten_movers_match_only_top_ten_survive() {
    let mut broker = ScriptedBroker::new();
    for index in 0..14 {
        let raw = format!("E{index}");
        let change = 1.0 + index as f64;
        broker = broker
            .with_mover(&raw, change)
            .with_sector_facts(&raw, "Energy")
            .with_quote(&raw, 100.0 * (1.0 + change / 100.0), 100.0);
    }

    let outcome = movers::screen_sector(&broker, "Energy").await;

    assert_eq!(outcome.movers.len(), movers::MAX_RANKED);
    // Largest magnitude first.
    assert_eq!(outcome.movers[0].symbol.as_str(), "E13");
}
