use serde::{Deserialize, Serialize};

/// Bid/ask pair for an instrument at a point in time. Ephemeral: returned
/// per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    /// `(bid + ask) / 2`.
    pub mid: f64,
    /// Provider-supplied, passed through as-is.
    pub timestamp: String,
}

/// OHLC summary for one time bucket. Ordering of a candle list follows
/// provider response order; this client does not sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleSeries {
    pub symbol: String,
    pub candles: Vec<Candle>,
}
