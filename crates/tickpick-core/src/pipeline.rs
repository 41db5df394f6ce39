//! End-to-end decision pipeline: screen, classify, allocate, size.
//!
//! Wires the stage functions together behind one entry point. Stages fail
//! soft: an empty stage output short-circuits the rest of the run into a
//! normal, recommendation-free outcome rather than an error. The only hard
//! errors out of a run are malformed allocator invocations.

use std::sync::Arc;

use serde::Serialize;

use crate::allocator::{self, AllocatorConfig, AllocatorError, Recommendation};
use crate::broker::{BrokerData, QuoteRequest};
use crate::movers::{self, Mover};
use crate::risk::{Candidate, RiskTier};

/// Fraction of account cash committed when no explicit budget is given.
pub const DEFAULT_BUDGET_FRACTION: f64 = 0.20;

/// One full pipeline run's inputs.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub sector: String,
    pub tolerance: RiskTier,
    /// Explicit trade budget in whole dollars. When absent, the budget is
    /// derived from the account snapshot as 20% of available cash.
    pub budget: Option<u32>,
    pub allocator: AllocatorConfig,
}

impl RunRequest {
    pub fn new(sector: impl Into<String>, tolerance: RiskTier) -> Self {
        Self {
            sector: sector.into(),
            tolerance,
            budget: None,
            allocator: AllocatorConfig::default(),
        }
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = Some(budget);
        self
    }
}

/// Everything a run produced, including the intermediate stage outputs so
/// callers can render the full decision trail.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunOutcome {
    pub movers: Vec<Mover>,
    pub candidates: Vec<Candidate>,
    pub budget: u32,
    pub recommendation: Option<Recommendation>,
    /// Whole shares the recommended amount buys at the last trade price.
    /// Absent when there is no recommendation or no usable price.
    pub order_quantity: Option<u64>,
    pub warnings: Vec<String>,
}

/// Stage orchestrator. Holds the brokerage adapter; everything else is
/// passed per run.
pub struct Pipeline {
    broker: Arc<dyn BrokerData>,
}

impl Pipeline {
    pub fn new(broker: Arc<dyn BrokerData>) -> Self {
        Self { broker }
    }

    pub fn broker(&self) -> &dyn BrokerData {
        self.broker.as_ref()
    }

    /// Run the full pipeline once.
    ///
    /// Returns `Ok` with an empty recommendation when any stage comes up
    /// empty (unknown sector, no movers in sector, no candidates at the
    /// requested tolerance). The allocator's parameter errors are the only
    /// way a run fails outright.
    pub async fn run(
        &self,
        request: &RunRequest,
        rng: &mut fastrand::Rng,
    ) -> Result<RunOutcome, AllocatorError> {
        let mut outcome = RunOutcome::default();

        let screen = movers::screen_sector(self.broker.as_ref(), &request.sector).await;
        outcome.warnings.extend(screen.warnings);
        outcome.movers = screen.movers;
        if outcome.movers.is_empty() {
            return Ok(outcome);
        }

        outcome.candidates = outcome
            .movers
            .iter()
            .map(Candidate::from_mover)
            .filter(|candidate| candidate.risk_tier == request.tolerance)
            .collect();
        if outcome.candidates.is_empty() {
            outcome.warnings.push(format!(
                "no movers at {} risk tolerance",
                request.tolerance
            ));
            return Ok(outcome);
        }

        outcome.budget = match request.budget {
            Some(budget) => budget,
            None => self.derive_budget(&mut outcome.warnings).await,
        };

        let recommendation = allocator::allocate(
            &outcome.candidates,
            outcome.budget,
            &request.allocator,
            rng,
        )?;

        outcome.order_quantity = self
            .size_order(&recommendation, &mut outcome.warnings)
            .await;
        outcome.recommendation = Some(recommendation);

        Ok(outcome)
    }

    /// Budget fallback: 20% of account cash, floored to whole dollars. An
    /// unreachable account endpoint degrades to a zero budget with a
    /// warning, which still produces a (zero-amount) recommendation.
    async fn derive_budget(&self, warnings: &mut Vec<String>) -> u32 {
        match self.broker.account().await {
            Ok(profile) => (profile.cash * DEFAULT_BUDGET_FRACTION).floor() as u32,
            Err(error) => {
                warnings.push(format!("account: {error}"));
                0
            }
        }
    }

    /// Convert the recommended dollar amount into whole shares at the last
    /// trade price. No price, or a zero price, means no sizable order.
    async fn size_order(
        &self,
        recommendation: &Recommendation,
        warnings: &mut Vec<String>,
    ) -> Option<u64> {
        let request = QuoteRequest::single(recommendation.symbol.clone());
        let quote = match self.broker.quote(request).await {
            Ok(batch) => batch.quotes.into_iter().next(),
            Err(error) => {
                warnings.push(format!("{} quote: {error}", recommendation.symbol));
                None
            }
        }?;

        if quote.last_price <= 0.0 {
            return None;
        }
        Some((f64::from(recommendation.invest_amount) / quote.last_price).floor() as u64)
    }
}
