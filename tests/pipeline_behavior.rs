//! End-to-end behavioral tests for the decision pipeline.

use std::sync::Arc;

use tickpick_core::pipeline::{Pipeline, RunRequest};
use tickpick_core::RiskTier;

use tickpick_tests::ScriptedBroker;

/// Energy slate: two high-risk movers, one medium, one low.
fn energy_broker() -> ScriptedBroker {
    ScriptedBroker::new()
        .with_mover("XOM", 5.8)
        .with_mover("PSX", 6.6)
        .with_mover("CVX", -2.2)
        .with_mover("KMI", 0.4)
        .with_sector_facts("XOM", "Energy")
        .with_sector_facts("PSX", "Energy")
        .with_sector_facts("CVX", "Energy")
        .with_sector_facts("KMI", "Energy")
        .with_quote("XOM", 105.8, 100.0)
        .with_quote("PSX", 106.6, 100.0)
        .with_quote("CVX", 97.8, 100.0)
        .with_quote("KMI", 100.4, 100.0)
        .with_account(5_000.0)
}

#[tokio::test]
async fn full_run_recommends_one_high_risk_candidate() {
    let pipeline = Pipeline::new(Arc::new(energy_broker()));
    let request = RunRequest::new("Energy", RiskTier::High).with_budget(1_000);
    let mut rng = fastrand::Rng::with_seed(11);

    let outcome = pipeline.run(&request, &mut rng).await.expect("run succeeds");

    // Ranked by magnitude: PSX, XOM, CVX, KMI; only the two high-tier
    // movers become candidates.
    assert_eq!(outcome.movers.len(), 4);
    assert_eq!(outcome.candidates.len(), 2);
    assert_eq!(outcome.candidates[0].symbol.as_str(), "PSX");
    assert_eq!(outcome.candidates[1].symbol.as_str(), "XOM");

    let rec = outcome.recommendation.expect("a recommendation");
    // First candidate gets the full budget, second gets budget / 2.
    match rec.symbol.as_str() {
        "PSX" => assert_eq!(rec.invest_amount, 1_000),
        "XOM" => assert_eq!(rec.invest_amount, 500),
        other => panic!("unexpected recommendation {other}"),
    }

    // Quantity is whole shares at the last trade price.
    let quantity = outcome.order_quantity.expect("sized order");
    assert!(quantity >= 1);
    assert!(quantity <= u64::from(rec.invest_amount) / 97);
}

#[tokio::test]
async fn same_seed_same_outcome() {
    let request = RunRequest::new("Energy", RiskTier::High).with_budget(1_000);

    let pipeline = Pipeline::new(Arc::new(energy_broker()));
    let mut first_rng = fastrand::Rng::with_seed(42);
    let first = pipeline
        .run(&request, &mut first_rng)
        .await
        .expect("first run succeeds");

    let pipeline = Pipeline::new(Arc::new(energy_broker()));
    let mut second_rng = fastrand::Rng::with_seed(42);
    let second = pipeline
        .run(&request, &mut second_rng)
        .await
        .expect("second run succeeds");

    assert_eq!(first.recommendation, second.recommendation);
    assert_eq!(first.order_quantity, second.order_quantity);
}

#[tokio::test]
async fn empty_tolerance_subset_ends_run_without_recommendation() {
    let pipeline = Pipeline::new(Arc::new(energy_broker()));
    // No Energy mover sits exactly in the low tier except KMI (0.4), so
    // ask for a tier nothing occupies after reranking: use a fresh broker
    // where every mover is high risk.
    let broker = ScriptedBroker::new()
        .with_mover("XOM", 5.8)
        .with_sector_facts("XOM", "Energy")
        .with_quote("XOM", 105.8, 100.0);
    let pipeline_high_only = Pipeline::new(Arc::new(broker));

    let request = RunRequest::new("Energy", RiskTier::Low).with_budget(1_000);
    let mut rng = fastrand::Rng::with_seed(1);

    let outcome = pipeline_high_only
        .run(&request, &mut rng)
        .await
        .expect("run still succeeds");

    assert!(!outcome.movers.is_empty());
    assert!(outcome.candidates.is_empty());
    assert!(outcome.recommendation.is_none());
    assert!(outcome.order_quantity.is_none());
    assert!(outcome
        .warnings
        .iter()
        .any(|w| w.contains("risk tolerance")));

    // The full slate does have a low-tier mover; sanity-check the happy path.
    let request = RunRequest::new("Energy", RiskTier::Low).with_budget(100);
    let outcome = pipeline
        .run(&request, &mut rng)
        .await
        .expect("run succeeds");
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].symbol.as_str(), "KMI");
}

#[tokio::test]
async fn unknown_sector_ends_run_without_recommendation() {
    let pipeline = Pipeline::new(Arc::new(energy_broker()));
    let request = RunRequest::new("Memestocks", RiskTier::High).with_budget(1_000);
    let mut rng = fastrand::Rng::with_seed(1);

    let outcome = pipeline.run(&request, &mut rng).await.expect("run succeeds");

    assert!(outcome.movers.is_empty());
    assert!(outcome.recommendation.is_none());
    assert_eq!(outcome.warnings.len(), 1);
}

#[tokio::test]
async fn default_budget_is_a_fifth_of_account_cash() {
    let pipeline = Pipeline::new(Arc::new(energy_broker()));
    let request = RunRequest::new("Energy", RiskTier::High);
    let mut rng = fastrand::Rng::with_seed(5);

    let outcome = pipeline.run(&request, &mut rng).await.expect("run succeeds");

    // 20% of the scripted 5,000 cash.
    assert_eq!(outcome.budget, 1_000);
    assert!(outcome.recommendation.is_some());
}

#[tokio::test]
async fn unreachable_account_degrades_to_zero_budget() {
    // No scripted account: the budget fallback fails soft.
    let broker = ScriptedBroker::new()
        .with_mover("XOM", 5.8)
        .with_sector_facts("XOM", "Energy")
        .with_quote("XOM", 105.8, 100.0);
    let pipeline = Pipeline::new(Arc::new(broker));
    let request = RunRequest::new("Energy", RiskTier::High);
    let mut rng = fastrand::Rng::with_seed(5);

    let outcome = pipeline.run(&request, &mut rng).await.expect("run succeeds");

    assert_eq!(outcome.budget, 0);
    let rec = outcome.recommendation.expect("zero-amount recommendation");
    assert_eq!(rec.invest_amount, 0);
    assert_eq!(outcome.order_quantity, Some(0));
    assert!(outcome.warnings.iter().any(|w| w.contains("account")));
}
