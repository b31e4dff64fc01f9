use crate::coerce_f64;
use chrono::{DateTime, Duration, Utc};
use journal_core::model::{Candle, CandleSeries, Quote};
use journal_core::{JournalError, MarketDataConfig, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Wrapper around the market-data provider's HTTP API.
///
/// Holds no state beyond configuration and a reqwest client; every
/// operation is call-scoped and no request state leaks between calls.
/// Failures never cross the boundary as panics: callers branch on the
/// returned `Result`.
#[derive(Debug)]
pub struct MarketDataClient {
    config: MarketDataConfig,
    client: Client,
}

/// Bounds for a historical candle lookup. Missing bounds default to the
/// trailing 24 hours from the current time.
#[derive(Debug, Clone)]
pub struct CandleRequest {
    /// Requested bucket size. The provider is queried at day granularity,
    /// so sub-day timeframes do not change the outbound request.
    pub timeframe: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Default for CandleRequest {
    fn default() -> Self {
        Self {
            timeframe: "1H".to_string(),
            start_time: None,
            end_time: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LiveResponse {
    #[serde(default)]
    quotes: Vec<LiveQuote>,
}

#[derive(Debug, Deserialize)]
struct LiveQuote {
    instrument: String,
    bid: Value,
    ask: Value,
    timestamp: Value,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    quotes: Vec<TimeSeriesQuote>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesQuote {
    date: String,
    open: Value,
    high: Value,
    low: Value,
    close: Value,
}

impl MarketDataClient {
    pub fn new(config: MarketDataConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or(JournalError::ApiKeyMissing)
    }

    /// Fetches the live quote for a single currency pair.
    ///
    /// A 200 response with an empty or absent `quotes` array is reported
    /// as `Status(200)`, carrying the provider's own status code.
    pub async fn get_live_price(&self, symbol: &str) -> Result<Quote> {
        let api_key = self.api_key()?;

        let url = format!("{}/live", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("currency", symbol), ("api_key", api_key)])
            .send()
            .await
            .map_err(|e| JournalError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 200 {
            let text = response
                .text()
                .await
                .map_err(|e| JournalError::Network(e.to_string()))?;
            let body: LiveResponse =
                serde_json::from_str(&text).map_err(|e| JournalError::Decode(e.to_string()))?;

            if let Some(quote) = body.quotes.into_iter().next() {
                let bid = coerce_f64(&quote.bid).ok_or_else(|| {
                    JournalError::Decode(format!("non-numeric bid for {}", quote.instrument))
                })?;
                let ask = coerce_f64(&quote.ask).ok_or_else(|| {
                    JournalError::Decode(format!("non-numeric ask for {}", quote.instrument))
                })?;

                debug!("Live quote for {}: bid {} ask {}", quote.instrument, bid, ask);

                return Ok(Quote {
                    symbol: quote.instrument,
                    bid,
                    ask,
                    mid: (bid + ask) / 2.0,
                    timestamp: coerce_timestamp(&quote.timestamp),
                });
            }
        }

        Err(JournalError::Status(status))
    }

    /// Fetches live quotes for several pairs, one after another. Output
    /// order matches input order; a failed lookup does not abort the batch.
    pub async fn get_live_prices(&self, symbols: &[String]) -> Vec<Result<Quote>> {
        let mut results = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let result = self.get_live_price(symbol).await;
            if let Err(e) = &result {
                warn!("Live price lookup for {} failed: {}", symbol, e);
            }
            results.push(result);
        }
        results
    }

    /// Fetches historical candles for a pair.
    ///
    /// Only the date portion of each bound is sent: the provider is
    /// queried at day granularity even when the caller supplies sub-day
    /// bounds.
    pub async fn get_historical_candles(
        &self,
        symbol: &str,
        request: CandleRequest,
    ) -> Result<CandleSeries> {
        let api_key = self.api_key()?;

        let end = request.end_time.unwrap_or_else(Utc::now);
        let start = request
            .start_time
            .unwrap_or_else(|| Utc::now() - Duration::hours(24));
        let start_date = start.format("%Y-%m-%d").to_string();
        let end_date = end.format("%Y-%m-%d").to_string();

        debug!(
            "Requesting {} candles for {} from {} to {}",
            request.timeframe, symbol, start_date, end_date
        );

        let url = format!("{}/timeseries", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("currency", symbol),
                ("api_key", api_key),
                ("start_date", start_date.as_str()),
                ("end_date", end_date.as_str()),
                ("format", "records"),
            ])
            .send()
            .await
            .map_err(|e| JournalError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(JournalError::Status(status));
        }

        let text = response
            .text()
            .await
            .map_err(|e| JournalError::Network(e.to_string()))?;
        let body: TimeSeriesResponse =
            serde_json::from_str(&text).map_err(|e| JournalError::Decode(e.to_string()))?;

        let candles = body
            .quotes
            .into_iter()
            .map(|quote| {
                Ok(Candle {
                    open: coerce_f64(&quote.open).ok_or_else(|| {
                        JournalError::Decode(format!("non-numeric open on {}", quote.date))
                    })?,
                    high: coerce_f64(&quote.high).ok_or_else(|| {
                        JournalError::Decode(format!("non-numeric high on {}", quote.date))
                    })?,
                    low: coerce_f64(&quote.low).ok_or_else(|| {
                        JournalError::Decode(format!("non-numeric low on {}", quote.date))
                    })?,
                    close: coerce_f64(&quote.close).ok_or_else(|| {
                        JournalError::Decode(format!("non-numeric close on {}", quote.date))
                    })?,
                    time: quote.date,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CandleSeries {
            symbol: symbol.to_string(),
            candles,
        })
    }

    /// Placeholder for session teardown. Each call owns its own connection
    /// lifecycle end-to-end, so there is nothing to release here.
    pub fn close_session(&self) {}
}

fn coerce_timestamp(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
