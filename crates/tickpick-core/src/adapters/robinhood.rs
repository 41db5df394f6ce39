//! Robinhood brokerage adapter.
//!
//! Supports both real API calls and an offline mode. The mode follows the
//! injected transport: a mock transport switches every endpoint to a
//! deterministic in-memory catalog, so the pipeline and its tests run
//! without network access or credentials.
//!
//! Robinhood serializes every numeric field as a JSON string
//! ("last_trade_price": "187.350000"); the payload structs below keep them
//! as strings and the parse helpers convert at the normalization boundary.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use time::Duration;

use crate::broker::{
    BarsRequest, BrokerData, BrokerError, BrokerFuture, FundamentalsBatch, FundamentalsRequest,
    MoverBatch, QuoteBatch, QuoteRequest,
};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, NoopHttpClient};
use crate::{
    AccountProfile, Bar, BarSeries, Fundamentals, Interval, OrderReceipt, OrderTicket, Quote,
    Span, Symbol, TopMover, UtcTimestamp, ValidationError,
};

const API_BASE: &str = "https://api.robinhood.com";

/// Robinhood adapter. Construct with [`RobinhoodAdapter::with_http_client`]
/// for live trading or [`RobinhoodAdapter::offline`] for the catalog mode.
#[derive(Clone)]
pub struct RobinhoodAdapter {
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
    use_real_api: bool,
    order_counter: Arc<AtomicU64>,
}

impl RobinhoodAdapter {
    pub fn offline() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            auth: HttpAuth::None,
            use_real_api: false,
            order_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, auth: HttpAuth) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            auth,
            use_real_api,
            order_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn is_real_client(&self) -> bool {
        self.use_real_api
    }

    async fn get_json(&self, endpoint: &str) -> Result<String, BrokerError> {
        let request = HttpRequest::get(endpoint).with_auth(&self.auth);
        let response = self.http_client.execute(request).await.map_err(|error| {
            BrokerError::unavailable(format!("robinhood transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(BrokerError::unavailable(format!(
                "robinhood returned status {}",
                response.status
            )));
        }

        Ok(response.body)
    }
}

impl BrokerData for RobinhoodAdapter {
    fn quote<'a>(&'a self, req: QuoteRequest) -> BrokerFuture<'a, QuoteBatch> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_quotes(&req).await
            } else {
                self.fetch_catalog_quotes(&req)
            }
        })
    }

    fn bars<'a>(&'a self, req: BarsRequest) -> BrokerFuture<'a, BarSeries> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_bars(&req).await
            } else {
                self.fetch_catalog_bars(&req)
            }
        })
    }

    fn fundamentals<'a>(&'a self, req: FundamentalsRequest) -> BrokerFuture<'a, FundamentalsBatch> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_fundamentals(&req).await
            } else {
                self.fetch_catalog_fundamentals(&req)
            }
        })
    }

    fn top_movers<'a>(&'a self) -> BrokerFuture<'a, MoverBatch> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_movers().await
            } else {
                self.fetch_catalog_movers()
            }
        })
    }

    fn account<'a>(&'a self) -> BrokerFuture<'a, AccountProfile> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_account().await
            } else {
                AccountProfile::new(10_000.0, 10_000.0).map_err(validation_to_error)
            }
        })
    }

    fn submit_order<'a>(&'a self, ticket: OrderTicket) -> BrokerFuture<'a, OrderReceipt> {
        Box::pin(async move {
            if ticket.quantity == 0 {
                return Err(BrokerError::invalid_request(
                    "order quantity must be at least one share",
                ));
            }

            if self.is_real_client() {
                self.submit_real_order(&ticket).await
            } else {
                let serial = self.order_counter.fetch_add(1, Ordering::SeqCst);
                Ok(OrderReceipt {
                    order_id: format!("offline-{serial:06}"),
                    symbol: ticket.symbol,
                    quantity: ticket.quantity,
                    state: String::from("confirmed"),
                })
            }
        })
    }
}

// Real API calls.
impl RobinhoodAdapter {
    async fn fetch_real_quotes(&self, req: &QuoteRequest) -> Result<QuoteBatch, BrokerError> {
        let symbols_param = join_symbols(&req.symbols);
        let endpoint = format!(
            "{API_BASE}/quotes/?symbols={}",
            urlencoding::encode(&symbols_param)
        );
        let body = self.get_json(&endpoint).await?;

        let payload: ResultsPayload<QuotePayload> = parse_payload(&body, "quotes")?;
        let as_of = UtcTimestamp::now();

        let quotes = payload
            .results
            .into_iter()
            .flatten()
            .filter_map(|raw| normalize_quote(raw, as_of))
            .collect::<Vec<_>>();

        if quotes.is_empty() {
            return Err(BrokerError::data_unavailable(format!(
                "no quotes for {symbols_param}"
            )));
        }
        Ok(QuoteBatch { quotes })
    }

    async fn fetch_real_bars(&self, req: &BarsRequest) -> Result<BarSeries, BrokerError> {
        let endpoint = format!(
            "{API_BASE}/quotes/historicals/{}/?interval={}&span={}&bounds=regular",
            urlencoding::encode(req.symbol.as_str()),
            req.interval,
            req.span
        );
        let body = self.get_json(&endpoint).await?;

        let payload: HistoricalsPayload = parse_payload(&body, "historicals")?;
        let bars = payload
            .historicals
            .into_iter()
            .filter_map(normalize_bar)
            .collect::<Vec<_>>();

        if bars.is_empty() {
            return Err(BrokerError::data_unavailable(format!(
                "no {}/{} history for {}",
                req.interval, req.span, req.symbol
            )));
        }
        Ok(BarSeries::new(req.symbol.clone(), req.interval, req.span, bars))
    }

    async fn fetch_real_fundamentals(
        &self,
        req: &FundamentalsRequest,
    ) -> Result<FundamentalsBatch, BrokerError> {
        let symbols_param = join_symbols(&req.symbols);
        let endpoint = format!(
            "{API_BASE}/fundamentals/?symbols={}",
            urlencoding::encode(&symbols_param)
        );
        let body = self.get_json(&endpoint).await?;

        // The fundamentals endpoint omits the symbol field; results come
        // back in request order, with null entries for unknown symbols.
        let payload: ResultsPayload<FundamentalsPayload> = parse_payload(&body, "fundamentals")?;

        let mut fundamentals = Vec::new();
        for (symbol, raw) in req.symbols.iter().zip(payload.results) {
            let Some(raw) = raw else { continue };
            let name = self.fetch_instrument_name(symbol).await;
            fundamentals.push(normalize_fundamentals(symbol.clone(), raw, name));
        }

        Ok(FundamentalsBatch { fundamentals })
    }

    /// Company display names live on the instruments endpoint, not on
    /// fundamentals. Best effort: a failed lookup leaves the name absent.
    async fn fetch_instrument_name(&self, symbol: &Symbol) -> Option<String> {
        let endpoint = format!(
            "{API_BASE}/instruments/?symbol={}",
            urlencoding::encode(symbol.as_str())
        );
        let body = self.get_json(&endpoint).await.ok()?;
        let payload: ResultsPayload<InstrumentPayload> =
            serde_json::from_str(&body).ok()?;

        payload
            .results
            .into_iter()
            .flatten()
            .next()
            .and_then(|instrument| instrument.simple_name.or(instrument.name))
    }

    async fn fetch_real_movers(&self) -> Result<MoverBatch, BrokerError> {
        let mut movers = Vec::new();
        for direction in ["up", "down"] {
            let endpoint =
                format!("{API_BASE}/midlands/movers/sp500/?direction={direction}");
            let body = self.get_json(&endpoint).await?;
            let payload: ResultsPayload<MoverPayload> = parse_payload(&body, "movers")?;

            for raw in payload.results.into_iter().flatten() {
                let Ok(symbol) = Symbol::parse(&raw.symbol) else {
                    continue;
                };
                let Some(change) = raw
                    .price_movement
                    .as_ref()
                    .and_then(|movement| parse_decimal(movement.market_hours_last_movement_pct.as_deref()))
                else {
                    continue;
                };
                movers.push(TopMover {
                    symbol,
                    percent_change: change,
                });
            }
        }

        Ok(MoverBatch { movers })
    }

    async fn fetch_real_account(&self) -> Result<AccountProfile, BrokerError> {
        let body = self.get_json(&format!("{API_BASE}/accounts/")).await?;
        let payload: ResultsPayload<AccountPayload> = parse_payload(&body, "accounts")?;

        let raw = payload
            .results
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| BrokerError::data_unavailable("no trading account on file"))?;

        let cash = parse_decimal(raw.cash.as_deref())
            .ok_or_else(|| BrokerError::internal("account cash is not numeric"))?;
        let buying_power = parse_decimal(raw.buying_power.as_deref()).unwrap_or(cash);

        AccountProfile::new(cash, buying_power).map_err(validation_to_error)
    }

    async fn submit_real_order(&self, ticket: &OrderTicket) -> Result<OrderReceipt, BrokerError> {
        let body = serde_json::json!({
            "symbol": ticket.symbol.as_str(),
            "quantity": ticket.quantity.to_string(),
            "side": "buy",
            "type": "market",
            "time_in_force": "gfd",
        });

        let request = HttpRequest::post_json(format!("{API_BASE}/orders/"), body.to_string())
            .with_auth(&self.auth);
        let response = self.http_client.execute(request).await.map_err(|error| {
            BrokerError::unavailable(format!("robinhood transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(BrokerError::unavailable(format!(
                "order rejected with status {}",
                response.status
            )));
        }

        let raw: OrderPayload = serde_json::from_str(&response.body)
            .map_err(|e| BrokerError::internal(format!("unparseable order receipt: {e}")))?;

        Ok(OrderReceipt {
            order_id: raw.id.unwrap_or_default(),
            symbol: ticket.symbol.clone(),
            quantity: ticket.quantity,
            state: raw.state.unwrap_or_else(|| String::from("unconfirmed")),
        })
    }
}

// Offline catalog. Deterministic by construction: prices derive from the
// catalog row or, for unlisted symbols, from a symbol hash.
impl RobinhoodAdapter {
    fn fetch_catalog_quotes(&self, req: &QuoteRequest) -> Result<QuoteBatch, BrokerError> {
        let as_of = UtcTimestamp::now();
        let quotes = req
            .symbols
            .iter()
            .map(|symbol| {
                let (previous_close, percent_change) = catalog_pricing(symbol);
                let last_price = previous_close * (1.0 + percent_change / 100.0);
                Quote::new(symbol.clone(), last_price, previous_close, as_of)
                    .map_err(validation_to_error)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuoteBatch { quotes })
    }

    fn fetch_catalog_bars(&self, req: &BarsRequest) -> Result<BarSeries, BrokerError> {
        let seed = symbol_seed(&req.symbol);
        let (previous_close, percent_change) = catalog_pricing(&req.symbol);
        let count = bar_count(req.span);

        // Spread the net change linearly across the series so the first
        // open and last close reproduce the catalog percent change.
        let start = previous_close;
        let total_move = start * percent_change / 100.0;
        let step = interval_duration(req.interval);
        let now = UtcTimestamp::now().into_inner();

        let mut bars = Vec::with_capacity(count);
        for index in 0..count {
            let offset = step * (count.saturating_sub(index + 1) as i32);
            let ts = UtcTimestamp::from_offset_datetime(now - offset)
                .map_err(validation_to_error)?;

            let progress = index as f64 / (count.saturating_sub(1).max(1)) as f64;
            let wiggle = ((seed.wrapping_add(index as u64) % 17) as f64 - 8.0) / 100.0;
            let open = (start + total_move * progress + wiggle).max(0.01);
            let close = if index + 1 == count {
                start + total_move
            } else {
                (open + total_move / count as f64).max(0.01)
            };

            bars.push(Bar::new(ts, open, close).map_err(validation_to_error)?);
        }

        Ok(BarSeries::new(req.symbol.clone(), req.interval, req.span, bars))
    }

    fn fetch_catalog_fundamentals(
        &self,
        req: &FundamentalsRequest,
    ) -> Result<FundamentalsBatch, BrokerError> {
        let fundamentals = req
            .symbols
            .iter()
            .filter_map(|symbol| {
                let row = catalog_row(symbol)?;
                let seed = symbol_seed(symbol);
                Some(Fundamentals {
                    symbol: symbol.clone(),
                    name: Some(String::from(row.name)),
                    sector: Some(String::from(row.sector)),
                    headquarters: Some(String::from(row.headquarters)),
                    market_cap: Some(2.0e11 + (seed % 900) as f64 * 1.0e9),
                    pe_ratio: Some(12.0 + (seed % 280) as f64 / 10.0),
                    average_volume: Some(8.0e6 + (seed % 400) as f64 * 1.0e5),
                })
            })
            .collect();

        Ok(FundamentalsBatch { fundamentals })
    }

    fn fetch_catalog_movers(&self) -> Result<MoverBatch, BrokerError> {
        let movers = CATALOG
            .iter()
            .map(|row| {
                Ok(TopMover {
                    symbol: Symbol::parse(row.symbol).map_err(validation_to_error)?,
                    percent_change: row.percent_change,
                })
            })
            .collect::<Result<Vec<_>, BrokerError>>()?;

        Ok(MoverBatch { movers })
    }
}

// Robinhood payload shapes. Numbers arrive as strings.

#[derive(Debug, Deserialize)]
struct ResultsPayload<T> {
    #[serde(default = "Vec::new")]
    results: Vec<Option<T>>,
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    symbol: String,
    last_trade_price: Option<String>,
    previous_close: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoricalsPayload {
    #[serde(default = "Vec::new")]
    historicals: Vec<BarPayload>,
}

#[derive(Debug, Deserialize)]
struct BarPayload {
    begins_at: String,
    open_price: Option<String>,
    close_price: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FundamentalsPayload {
    sector: Option<String>,
    headquarters_city: Option<String>,
    headquarters_state: Option<String>,
    market_cap: Option<String>,
    pe_ratio: Option<String>,
    average_volume: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstrumentPayload {
    simple_name: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MoverPayload {
    symbol: String,
    price_movement: Option<PriceMovementPayload>,
}

#[derive(Debug, Deserialize)]
struct PriceMovementPayload {
    market_hours_last_movement_pct: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccountPayload {
    cash: Option<String>,
    buying_power: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrderPayload {
    id: Option<String>,
    state: Option<String>,
}

fn parse_payload<'de, T: Deserialize<'de>>(body: &'de str, what: &str) -> Result<T, BrokerError> {
    serde_json::from_str(body)
        .map_err(|e| BrokerError::internal(format!("unparseable {what} payload: {e}")))
}

fn parse_decimal(value: Option<&str>) -> Option<f64> {
    value?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn normalize_quote(raw: QuotePayload, as_of: UtcTimestamp) -> Option<Quote> {
    let symbol = Symbol::parse(&raw.symbol).ok()?;
    let last_price = parse_decimal(raw.last_trade_price.as_deref())?;
    let previous_close = parse_decimal(raw.previous_close.as_deref())?;
    Quote::new(symbol, last_price, previous_close, as_of).ok()
}

fn normalize_bar(raw: BarPayload) -> Option<Bar> {
    let ts = UtcTimestamp::parse(&raw.begins_at).ok()?;
    let open = parse_decimal(raw.open_price.as_deref())?;
    let close = parse_decimal(raw.close_price.as_deref())?;
    Bar::new(ts, open, close).ok()
}

fn normalize_fundamentals(
    symbol: Symbol,
    raw: FundamentalsPayload,
    name: Option<String>,
) -> Fundamentals {
    let headquarters = match (raw.headquarters_city, raw.headquarters_state) {
        (Some(city), Some(state)) => Some(format!("{city}, {state}")),
        (Some(city), None) => Some(city),
        (None, Some(state)) => Some(state),
        (None, None) => None,
    };

    Fundamentals {
        symbol,
        name,
        sector: raw.sector,
        headquarters,
        market_cap: parse_decimal(raw.market_cap.as_deref()),
        pe_ratio: parse_decimal(raw.pe_ratio.as_deref()),
        average_volume: parse_decimal(raw.average_volume.as_deref()),
    }
}

fn validation_to_error(error: ValidationError) -> BrokerError {
    BrokerError::internal(error.to_string())
}

struct CatalogRow {
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    headquarters: &'static str,
    previous_close: f64,
    percent_change: f64,
}

const CATALOG: [CatalogRow; 16] = [
    CatalogRow { symbol: "AAPL", name: "Apple Inc.", sector: "Information Technology", headquarters: "Cupertino, CA", previous_close: 187.40, percent_change: 1.2 },
    CatalogRow { symbol: "MSFT", name: "Microsoft Corporation", sector: "Information Technology", headquarters: "Redmond, WA", previous_close: 415.10, percent_change: 0.8 },
    CatalogRow { symbol: "NVDA", name: "NVIDIA Corporation", sector: "Information Technology", headquarters: "Santa Clara, CA", previous_close: 124.60, percent_change: 6.4 },
    CatalogRow { symbol: "AMD", name: "Advanced Micro Devices", sector: "Information Technology", headquarters: "Santa Clara, CA", previous_close: 158.20, percent_change: -4.1 },
    CatalogRow { symbol: "GOOG", name: "Alphabet Inc.", sector: "Communication Services", headquarters: "Mountain View, CA", previous_close: 176.30, percent_change: 2.6 },
    CatalogRow { symbol: "NFLX", name: "Netflix, Inc.", sector: "Communication Services", headquarters: "Los Gatos, CA", previous_close: 642.80, percent_change: -3.4 },
    CatalogRow { symbol: "XOM", name: "Exxon Mobil Corporation", sector: "Energy", headquarters: "Spring, TX", previous_close: 114.90, percent_change: 5.8 },
    CatalogRow { symbol: "CVX", name: "Chevron Corporation", sector: "Energy", headquarters: "San Ramon, CA", previous_close: 156.70, percent_change: -2.2 },
    CatalogRow { symbol: "JPM", name: "JPMorgan Chase & Co.", sector: "Financials", headquarters: "New York, NY", previous_close: 198.50, percent_change: 1.9 },
    CatalogRow { symbol: "GS", name: "The Goldman Sachs Group", sector: "Financials", headquarters: "New York, NY", previous_close: 447.20, percent_change: 3.1 },
    CatalogRow { symbol: "JNJ", name: "Johnson & Johnson", sector: "Health Care", headquarters: "New Brunswick, NJ", previous_close: 152.30, percent_change: -0.9 },
    CatalogRow { symbol: "PFE", name: "Pfizer Inc.", sector: "Health Care", headquarters: "New York, NY", previous_close: 27.80, percent_change: 2.4 },
    CatalogRow { symbol: "AMZN", name: "Amazon.com, Inc.", sector: "Consumer Discretionary", headquarters: "Seattle, WA", previous_close: 184.70, percent_change: 4.6 },
    CatalogRow { symbol: "TSLA", name: "Tesla, Inc.", sector: "Consumer Discretionary", headquarters: "Austin, TX", previous_close: 246.40, percent_change: -7.9 },
    CatalogRow { symbol: "PG", name: "The Procter & Gamble Company", sector: "Consumer Staples", headquarters: "Cincinnati, OH", previous_close: 167.90, percent_change: 0.4 },
    CatalogRow { symbol: "NEE", name: "NextEra Energy, Inc.", sector: "Utilities", headquarters: "Juno Beach, FL", previous_close: 73.60, percent_change: 1.1 },
];

fn catalog_row(symbol: &Symbol) -> Option<&'static CatalogRow> {
    CATALOG.iter().find(|row| row.symbol == symbol.as_str())
}

/// Pricing for any symbol: the catalog row when listed, otherwise a mild
/// hash-derived quote so arbitrary symbols still resolve in offline mode.
fn catalog_pricing(symbol: &Symbol) -> (f64, f64) {
    if let Some(row) = catalog_row(symbol) {
        return (row.previous_close, row.percent_change);
    }
    let seed = symbol_seed(symbol);
    let previous_close = 40.0 + (seed % 600) as f64 / 10.0;
    let percent_change = (seed % 130) as f64 / 10.0 - 6.5;
    (previous_close, percent_change)
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}

fn bar_count(span: Span) -> usize {
    match span {
        Span::Day => 78,
        Span::Week => 130,
        Span::Month => 160,
        Span::Year => 252,
    }
}

fn interval_duration(interval: Interval) -> Duration {
    match interval {
        Interval::FiveMinute => Duration::minutes(5),
        Interval::TenMinute => Duration::minutes(10),
        Interval::Hour => Duration::hours(1),
        Interval::Day => Duration::days(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::percent_change;

    fn offline() -> RobinhoodAdapter {
        RobinhoodAdapter::offline()
    }

    #[tokio::test]
    async fn catalog_quote_reproduces_listed_percent_change() {
        let adapter = offline();
        let symbol = Symbol::parse("NVDA").expect("symbol");
        let batch = adapter
            .quote(QuoteRequest::single(symbol))
            .await
            .expect("quote should succeed");

        let quote = batch.quotes.first().expect("one quote");
        let change = percent_change(quote.previous_close, quote.last_price)
            .expect("change should exist");
        assert!((change - 6.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn catalog_bars_span_the_listed_move() {
        let adapter = offline();
        let symbol = Symbol::parse("XOM").expect("symbol");
        let series = adapter
            .bars(BarsRequest::new(symbol, Interval::Day, Span::Year))
            .await
            .expect("bars should succeed");

        assert_eq!(series.bars.len(), 252);
        let last = series.bars.last().expect("non-empty");
        assert!((last.close - 114.90 * 1.058).abs() < 1e-6);
    }

    #[tokio::test]
    async fn catalog_fundamentals_omit_unlisted_symbols() {
        let adapter = offline();
        let symbols = vec![
            Symbol::parse("AAPL").expect("symbol"),
            Symbol::parse("ZZZQ").expect("symbol"),
        ];
        let batch = adapter
            .fundamentals(FundamentalsRequest::new(symbols).expect("request"))
            .await
            .expect("fundamentals should succeed");

        assert_eq!(batch.fundamentals.len(), 1);
        assert_eq!(batch.fundamentals[0].symbol.as_str(), "AAPL");
        assert_eq!(
            batch.fundamentals[0].sector.as_deref(),
            Some("Information Technology")
        );
    }

    #[tokio::test]
    async fn offline_orders_get_serial_receipts() {
        let adapter = offline();
        let ticket = OrderTicket {
            symbol: Symbol::parse("PFE").expect("symbol"),
            quantity: 3,
        };
        let first = adapter
            .submit_order(ticket.clone())
            .await
            .expect("order should succeed");
        let second = adapter
            .submit_order(ticket)
            .await
            .expect("order should succeed");

        assert_eq!(first.order_id, "offline-000000");
        assert_eq!(second.order_id, "offline-000001");
        assert_eq!(first.state, "confirmed");
    }

    #[tokio::test]
    async fn zero_quantity_order_is_rejected() {
        let adapter = offline();
        let ticket = OrderTicket {
            symbol: Symbol::parse("PG").expect("symbol"),
            quantity: 0,
        };
        let err = adapter
            .submit_order(ticket)
            .await
            .expect_err("must be rejected");
        assert_eq!(err.kind(), crate::broker::BrokerErrorKind::InvalidRequest);
    }

    #[test]
    fn decimal_parsing_handles_robinhood_strings() {
        assert_eq!(parse_decimal(Some("187.350000")), Some(187.35));
        assert_eq!(parse_decimal(Some(" 12.5 ")), Some(12.5));
        assert_eq!(parse_decimal(Some("not-a-number")), None);
        assert_eq!(parse_decimal(None), None);
    }
}
