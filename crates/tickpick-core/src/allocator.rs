//! Tabular reward search over risk-filtered candidates.
//!
//! This is a bounded random sampler dressed as Q-learning, reproduced with
//! its original behavior intact. Each trial walks the candidate list in
//! order, draws a random spend for each, and records the best reward ever
//! observed per (candidate, remaining budget) cell. There is no value
//! propagation between candidates and no convergence; the selection only
//! ever compares the full-budget column, so for every candidate past the
//! first, later epochs influence it only when all earlier candidates drew
//! zero. Changing any of this changes the recommendation distribution, so
//! the procedure is kept as is.

use serde::Serialize;
use thiserror::Error;

use crate::risk::Candidate;
use crate::Symbol;

/// Allocation call failures. Everything else in the pipeline fails soft;
/// these two are malformed invocations and surface to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocatorError {
    #[error("no candidates to allocate across")]
    NoCandidates,
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

/// Search tuning knobs.
///
/// `alpha`, `gamma`, and `epsilon` were ambient globals in earlier
/// revisions of this procedure; they are carried here as explicit fields
/// even though the reward formula does not read them, so that callers see
/// the full parameter surface in one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocatorConfig {
    pub epochs: u32,
    pub alpha: f64,
    pub gamma: f64,
    pub epsilon: f64,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            epochs: 1_000,
            alpha: 0.1,
            gamma: 0.6,
            epsilon: 0.1,
        }
    }
}

impl AllocatorConfig {
    pub fn with_epochs(epochs: u32) -> Self {
        Self {
            epochs,
            ..Self::default()
        }
    }
}

/// The allocator's sole externally meaningful output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub symbol: Symbol,
    pub invest_amount: u32,
}

/// Dense best-reward grid over (candidate index, remaining budget).
///
/// Dimensions are known up front, so this is a flat arena rather than a
/// nested structure: cell (i, b) lives at `i * (budget + 1) + b`. Rebuilt
/// from zeros on every allocation run and discarded after the winning cell
/// is read.
struct RewardTable {
    cells: Vec<f64>,
    width: usize,
}

impl RewardTable {
    fn new(candidates: usize, budget: u32) -> Self {
        let width = budget as usize + 1;
        Self {
            cells: vec![0.0; candidates * width],
            width,
        }
    }

    fn record_max(&mut self, candidate: usize, remaining: u32, reward: f64) {
        let cell = &mut self.cells[candidate * self.width + remaining as usize];
        if reward > *cell {
            *cell = reward;
        }
    }

    /// Index of the best reward in the full-budget column; first maximum
    /// wins on ties, so an all-zero column resolves to index 0.
    fn best_at_full_budget(&self, candidates: usize, budget: u32) -> usize {
        let mut best_index = 0;
        let mut best_reward = f64::NEG_INFINITY;
        for index in 0..candidates {
            let reward = self.cells[index * self.width + budget as usize];
            if reward > best_reward {
                best_reward = reward;
                best_index = index;
            }
        }
        best_index
    }
}

/// Amount heuristic tied to the winning index, not to the observed reward:
/// the first candidate gets the whole budget, candidate i gets the integer
/// quotient `budget / (i + 1)`.
fn invest_amount(best_index: usize, budget: u32) -> u32 {
    if best_index == 0 {
        budget
    } else {
        budget / (best_index as u32 + 1)
    }
}

/// Run the reward search and pick one candidate and an amount.
///
/// The RNG is injected so seeded runs reproduce exactly; each trial draws
/// its spend uniformly from `[0, remaining]` inclusive.
pub fn allocate(
    candidates: &[Candidate],
    budget: u32,
    config: &AllocatorConfig,
    rng: &mut fastrand::Rng,
) -> Result<Recommendation, AllocatorError> {
    if candidates.is_empty() {
        return Err(AllocatorError::NoCandidates);
    }
    if config.epochs == 0 {
        return Err(AllocatorError::InvalidParameter {
            reason: String::from("epochs must be positive"),
        });
    }

    let mut table = RewardTable::new(candidates.len(), budget);

    for _ in 0..config.epochs {
        let mut remaining = budget;
        for (index, candidate) in candidates.iter().enumerate() {
            let action = rng.u32(0..=remaining);
            let reward = f64::from(action) * (candidate.volatility / 100.0);
            table.record_max(index, remaining, reward);
            remaining -= action;
        }
    }

    let best_index = table.best_at_full_budget(candidates.len(), budget);

    Ok(Recommendation {
        symbol: candidates[best_index].symbol.clone(),
        invest_amount: invest_amount(best_index, budget),
    })
}
