//! Brokerage collaborator contract.
//!
//! The pipeline never talks to the network directly; every external call
//! goes through [`BrokerData`]. Adapters implement the trait with boxed
//! futures so the pipeline can hold a `dyn BrokerData` and tests can swap
//! in a scripted implementation.
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | Quote | [`QuoteRequest`] | [`QuoteBatch`] |
//! | Historicals | [`BarsRequest`] | [`BarSeries`] |
//! | Fundamentals | [`FundamentalsRequest`] | [`FundamentalsBatch`] |
//! | Top movers | (none) | [`MoverBatch`] |
//! | Account | (none) | [`AccountProfile`] |
//! | Order | [`OrderTicket`] | [`OrderReceipt`] |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::{
    AccountProfile, BarSeries, Fundamentals, Interval, OrderReceipt, OrderTicket, Quote, Span,
    Symbol, TopMover,
};

/// Collaborator-edge error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerErrorKind {
    /// The symbol is unknown, the market is closed with no cached quote, or
    /// the endpoint returned an empty payload. Batch stages swallow this
    /// per item; it never aborts a batch.
    DataUnavailable,
    /// Transport or upstream failure; retryable in principle, though the
    /// pipeline itself fails soft once and moves on.
    Unavailable,
    /// Malformed request; surfaced to the caller.
    InvalidRequest,
    /// Bug-shaped failure (unparseable payload, broken invariant).
    Internal,
}

/// Structured error returned by every [`BrokerData`] endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerError {
    kind: BrokerErrorKind,
    message: String,
    retryable: bool,
}

impl BrokerError {
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: BrokerErrorKind::DataUnavailable,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: BrokerErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: BrokerErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: BrokerErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> BrokerErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            BrokerErrorKind::DataUnavailable => "broker.data_unavailable",
            BrokerErrorKind::Unavailable => "broker.unavailable",
            BrokerErrorKind::InvalidRequest => "broker.invalid_request",
            BrokerErrorKind::Internal => "broker.internal",
        }
    }
}

impl Display for BrokerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for BrokerError {}

/// Request payload for the quote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub symbols: Vec<Symbol>,
}

impl QuoteRequest {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, BrokerError> {
        if symbols.is_empty() {
            return Err(BrokerError::invalid_request(
                "quote request must include at least one symbol",
            ));
        }
        Ok(Self { symbols })
    }

    pub fn single(symbol: Symbol) -> Self {
        Self {
            symbols: vec![symbol],
        }
    }
}

/// Request payload for the historicals endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarsRequest {
    pub symbol: Symbol,
    pub interval: Interval,
    pub span: Span,
}

impl BarsRequest {
    pub fn new(symbol: Symbol, interval: Interval, span: Span) -> Self {
        Self {
            symbol,
            interval,
            span,
        }
    }
}

/// Request payload for the fundamentals endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundamentalsRequest {
    pub symbols: Vec<Symbol>,
}

impl FundamentalsRequest {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, BrokerError> {
        if symbols.is_empty() {
            return Err(BrokerError::invalid_request(
                "fundamentals request must include at least one symbol",
            ));
        }
        Ok(Self { symbols })
    }
}

/// Normalized quote batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBatch {
    pub quotes: Vec<Quote>,
}

/// Normalized fundamentals batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsBatch {
    pub fundamentals: Vec<Fundamentals>,
}

/// Normalized top-movers batch. Broad market, not sector-filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverBatch {
    pub movers: Vec<TopMover>,
}

pub type BrokerFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, BrokerError>> + Send + 'a>>;

/// Brokerage adapter contract.
///
/// Implementations must be `Send + Sync`; the pipeline shares one adapter
/// across its stages behind an `Arc`.
pub trait BrokerData: Send + Sync {
    /// Fetch live quotes for the requested symbols.
    ///
    /// A symbol the brokerage does not know, or one without a current
    /// quote, yields [`BrokerErrorKind::DataUnavailable`].
    fn quote<'a>(&'a self, req: QuoteRequest) -> BrokerFuture<'a, QuoteBatch>;

    /// Fetch the historical bar series for one (symbol, interval, span).
    ///
    /// An empty upstream payload is reported as
    /// [`BrokerErrorKind::DataUnavailable`]; the pipeline converts that
    /// into an absent change value.
    fn bars<'a>(&'a self, req: BarsRequest) -> BrokerFuture<'a, BarSeries>;

    /// Fetch company facts for the requested symbols. Symbols without
    /// facts are simply omitted from the batch.
    fn fundamentals<'a>(&'a self, req: FundamentalsRequest) -> BrokerFuture<'a, FundamentalsBatch>;

    /// Fetch the broad-market top movers list.
    fn top_movers<'a>(&'a self) -> BrokerFuture<'a, MoverBatch>;

    /// Fetch the trading account snapshot (cash, buying power).
    fn account<'a>(&'a self) -> BrokerFuture<'a, AccountProfile>;

    /// Submit a market buy order. The pipeline only ever computes the
    /// ticket; submission happens strictly on caller request.
    fn submit_order<'a>(&'a self, ticket: OrderTicket) -> BrokerFuture<'a, OrderReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_request_rejects_empty_symbol_list() {
        let err = QuoteRequest::new(Vec::new()).expect_err("must fail");
        assert_eq!(err.kind(), BrokerErrorKind::InvalidRequest);
        assert!(!err.retryable());
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            BrokerError::data_unavailable("x").code(),
            "broker.data_unavailable"
        );
        assert!(BrokerError::unavailable("down").retryable());
    }
}
