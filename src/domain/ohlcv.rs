//! Daily OHLCV bar representation.

use chrono::NaiveDate;

/// One bar of daily price data. Produced by a market data provider and
/// treated as immutable by the engine; the engine trusts the provider for
/// `high >= max(open, close)` and `low <= min(open, close)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
