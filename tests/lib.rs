//! Shared test support: a scripted brokerage for behavioral tests.

use std::collections::HashMap;
use std::sync::Mutex;

use tickpick_core::broker::{
    BarsRequest, BrokerData, BrokerError, BrokerFuture, FundamentalsBatch, FundamentalsRequest,
    MoverBatch, QuoteBatch, QuoteRequest,
};
use tickpick_core::{
    AccountProfile, Bar, BarSeries, Fundamentals, Interval, OrderReceipt, OrderTicket, Quote,
    Span, Symbol, TopMover, UtcTimestamp,
};

/// Fixed timestamp used for all scripted market data.
pub fn ts() -> UtcTimestamp {
    UtcTimestamp::parse("2026-03-02T15:30:00Z").expect("fixed timestamp is valid")
}

pub fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("test symbol is valid")
}

/// In-memory [`BrokerData`] scripted per test. Endpoints answer from the
/// maps below; anything not scripted fails the way the real brokerage
/// would (data unavailable), which is exactly what the soft-failure paths
/// under test need.
#[derive(Default)]
pub struct ScriptedBroker {
    quotes: HashMap<String, Quote>,
    bars: HashMap<(String, Interval, Span), Vec<Bar>>,
    fundamentals: Vec<Fundamentals>,
    movers: Vec<TopMover>,
    account: Option<AccountProfile>,
    pub submitted: Mutex<Vec<OrderTicket>>,
}

impl ScriptedBroker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, raw: &str, last_price: f64, previous_close: f64) -> Self {
        let quote = Quote::new(symbol(raw), last_price, previous_close, ts())
            .expect("scripted quote is valid");
        self.quotes.insert(raw.to_owned(), quote);
        self
    }

    pub fn with_bars(
        mut self,
        raw: &str,
        interval: Interval,
        span: Span,
        open_close: &[(f64, f64)],
    ) -> Self {
        let bars = open_close
            .iter()
            .map(|(open, close)| Bar::new(ts(), *open, *close).expect("scripted bar is valid"))
            .collect();
        self.bars.insert((raw.to_owned(), interval, span), bars);
        self
    }

    pub fn with_facts(mut self, facts: Fundamentals) -> Self {
        self.fundamentals.push(facts);
        self
    }

    pub fn with_sector_facts(self, raw: &str, sector: &str) -> Self {
        self.with_facts(Fundamentals::new(symbol(raw)).with_sector(sector))
    }

    pub fn with_mover(mut self, raw: &str, percent_change: f64) -> Self {
        self.movers.push(TopMover {
            symbol: symbol(raw),
            percent_change,
        });
        self
    }

    pub fn with_account(mut self, cash: f64) -> Self {
        self.account =
            Some(AccountProfile::new(cash, cash).expect("scripted account is valid"));
        self
    }

    pub fn submitted_tickets(&self) -> Vec<OrderTicket> {
        self.submitted
            .lock()
            .expect("ticket store should not be poisoned")
            .clone()
    }
}

impl BrokerData for ScriptedBroker {
    fn quote<'a>(&'a self, req: QuoteRequest) -> BrokerFuture<'a, QuoteBatch> {
        Box::pin(async move {
            let quotes: Vec<Quote> = req
                .symbols
                .iter()
                .filter_map(|s| self.quotes.get(s.as_str()).cloned())
                .collect();
            if quotes.is_empty() {
                return Err(BrokerError::data_unavailable("no scripted quotes"));
            }
            Ok(QuoteBatch { quotes })
        })
    }

    fn bars<'a>(&'a self, req: BarsRequest) -> BrokerFuture<'a, BarSeries> {
        Box::pin(async move {
            let key = (req.symbol.as_str().to_owned(), req.interval, req.span);
            match self.bars.get(&key) {
                Some(bars) => Ok(BarSeries::new(
                    req.symbol.clone(),
                    req.interval,
                    req.span,
                    bars.clone(),
                )),
                None => Err(BrokerError::data_unavailable("no scripted bars")),
            }
        })
    }

    fn fundamentals<'a>(&'a self, req: FundamentalsRequest) -> BrokerFuture<'a, FundamentalsBatch> {
        Box::pin(async move {
            let fundamentals = self
                .fundamentals
                .iter()
                .filter(|facts| req.symbols.contains(&facts.symbol))
                .cloned()
                .collect();
            Ok(FundamentalsBatch { fundamentals })
        })
    }

    fn top_movers<'a>(&'a self) -> BrokerFuture<'a, MoverBatch> {
        Box::pin(async move {
            Ok(MoverBatch {
                movers: self.movers.clone(),
            })
        })
    }

    fn account<'a>(&'a self) -> BrokerFuture<'a, AccountProfile> {
        Box::pin(async move {
            self.account
                .clone()
                .ok_or_else(|| BrokerError::unavailable("no scripted account"))
        })
    }

    fn submit_order<'a>(&'a self, ticket: OrderTicket) -> BrokerFuture<'a, OrderReceipt> {
        Box::pin(async move {
            let receipt = OrderReceipt {
                order_id: format!("scripted-{}", ticket.symbol),
                symbol: ticket.symbol.clone(),
                quantity: ticket.quantity,
                state: String::from("confirmed"),
            };
            self.submitted
                .lock()
                .expect("ticket store should not be poisoned")
                .push(ticket);
            Ok(receipt)
        })
    }
}
