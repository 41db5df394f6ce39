//! Canonical domain types for the decision pipeline.
//!
//! All models validate their invariants at construction time and are plain
//! value objects: each pipeline stage consumes immutable inputs and produces
//! new values, nothing is shared mutably across stages.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Quote`] | Last trade price against previous close |
//! | [`Bar`] / [`BarSeries`] | Historical open/close bars per (interval, span) |
//! | [`Fundamentals`] | Company facts snapshot (all fields optional) |
//! | [`TopMover`] | Broad-market mover before sector filtering |
//! | [`Sector`] | Fixed 12-name sector set with word-subset matching |
//! | [`Symbol`] | Validated ticker symbol |
//! | [`Interval`] / [`Span`] | Historicals bucket size and lookback window |
//! | [`UtcTimestamp`] | RFC3339 UTC timestamp |
//! | [`AccountProfile`] | Cash/buying-power snapshot |
//! | [`OrderTicket`] / [`OrderReceipt`] | Order submission payloads |

mod interval;
mod models;
mod sector;
mod symbol;
mod timestamp;

pub use interval::{Interval, Span};
pub use models::{
    AccountProfile, Bar, BarSeries, Fundamentals, OrderReceipt, OrderTicket, Quote, TopMover,
};
pub use sector::Sector;
pub use symbol::Symbol;
pub use timestamp::UtcTimestamp;
