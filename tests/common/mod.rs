#![allow(dead_code)]

use chrono::NaiveDate;
use tradelab::domain::error::TradelabError;
use tradelab::domain::ohlcv::PricePoint;
use tradelab::domain::strategy::{StrategyConfig, StrategyMode};
use tradelab::ports::data_port::MarketDataPort;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn make_bars(closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: date(2024, 1, 1) + chrono::Duration::days(i as i64),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000.0,
        })
        .collect()
}

pub fn algo_config() -> StrategyConfig {
    StrategyConfig {
        mode: StrategyMode::Algo,
        initial_capital: 1000.0,
        short_window: 2,
        long_window: 3,
        rsi_period: 2,
        rsi_overbought: 70.0,
        rsi_oversold: 30.0,
        use_rsi_filter: false,
    }
}

/// In-memory market data port for driving the engine without files.
pub struct MockDataPort {
    pub bars: Vec<PricePoint>,
}

impl MockDataPort {
    pub fn new(bars: Vec<PricePoint>) -> Self {
        Self { bars }
    }
}

impl MarketDataPort for MockDataPort {
    fn fetch_daily(&self) -> Result<Vec<PricePoint>, TradelabError> {
        Ok(self.bars.clone())
    }
}
