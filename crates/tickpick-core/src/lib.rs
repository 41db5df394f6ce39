//! # Tickpick Core
//!
//! Domain types, brokerage contracts, and the decision pipeline for the
//! tickpick stock screener.
//!
//! ## Overview
//!
//! The pipeline turns a sector name and a risk tolerance into a single
//! trade recommendation in four stages:
//!
//! - **Sector screen** keeps broad-market movers whose reported sector
//!   matches one of twelve recognized names, ranked by magnitude of change
//! - **Risk classification** buckets each mover into low/medium/high by
//!   absolute percent change
//! - **Budget allocation** runs a tabular reward search over the candidates
//!   at the requested tolerance and picks one symbol and an amount
//! - **Order sizing** converts the amount into whole shares at the last
//!   trade price
//!
//! All brokerage access goes through the [`broker::BrokerData`] trait; the
//! bundled [`adapters::RobinhoodAdapter`] serves real API data behind a live
//! transport and a deterministic catalog behind a mock one.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Brokerage adapters (Robinhood) |
//! | [`allocator`] | Tabular reward search over candidates |
//! | [`broker`] | Brokerage trait and request/response types |
//! | [`domain`] | Domain models (Quote, Bar, Fundamentals, Sector) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`movers`] | Sector screening and ranking |
//! | [`performance`] | Multi-horizon percent-change report |
//! | [`pipeline`] | Stage orchestration |
//! | [`risk`] | Volatility-to-tier classification |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickpick_core::adapters::RobinhoodAdapter;
//! use tickpick_core::pipeline::{Pipeline, RunRequest};
//! use tickpick_core::risk::RiskTier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::new(Arc::new(RobinhoodAdapter::offline()));
//!     let request = RunRequest::new("Energy", RiskTier::High).with_budget(1_000);
//!     let mut rng = fastrand::Rng::with_seed(7);
//!
//!     let outcome = pipeline.run(&request, &mut rng).await?;
//!     if let Some(rec) = &outcome.recommendation {
//!         println!("buy ${} of {}", rec.invest_amount, rec.symbol);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Per-item collaborator failures never abort a stage: the affected symbol
//! drops out (or its cell renders as "N/A") and a warning lands on the
//! stage result. Hard `Result` errors are reserved for malformed inputs,
//! see [`error::ValidationError`], [`broker::BrokerError`], and
//! [`allocator::AllocatorError`].

pub mod adapters;
pub mod allocator;
pub mod broker;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod movers;
pub mod performance;
pub mod pipeline;
pub mod risk;

// Re-export commonly used types at crate root for convenience

pub use adapters::RobinhoodAdapter;

pub use allocator::{AllocatorConfig, AllocatorError, Recommendation};

pub use broker::{
    BarsRequest, BrokerData, BrokerError, BrokerErrorKind, BrokerFuture, FundamentalsBatch,
    FundamentalsRequest, MoverBatch, QuoteBatch, QuoteRequest,
};

pub use domain::{
    AccountProfile, Bar, BarSeries, Fundamentals, Interval, OrderReceipt, OrderTicket, Quote,
    Sector, Span, Symbol, TopMover, UtcTimestamp,
};

pub use error::{CoreError, ValidationError};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

pub use movers::{Mover, ScreenOutcome};

pub use performance::{PerformanceReport, PerformanceRow};

pub use pipeline::{Pipeline, RunOutcome, RunRequest};

pub use risk::{Candidate, RiskTier};
