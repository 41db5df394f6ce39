//! Brokerage adapters implementing [`crate::broker::BrokerData`].

pub mod robinhood;

pub use robinhood::RobinhoodAdapter;
