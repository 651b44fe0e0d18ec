//! Synthetic market data adapter.
//!
//! Seeded random-walk generator used as the fallback provider when no real
//! price file is available. The same seed always yields the same series,
//! so backtests against synthetic data stay reproducible.

use crate::domain::error::TradelabError;
use crate::domain::ohlcv::PricePoint;
use crate::ports::data_port::MarketDataPort;
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SyntheticDataAdapter {
    pub start_date: NaiveDate,
    pub days: usize,
    pub start_price: f64,
    pub seed: u64,
}

impl SyntheticDataAdapter {
    pub fn new(start_date: NaiveDate, days: usize, start_price: f64, seed: u64) -> Self {
        Self {
            start_date,
            days,
            start_price,
            seed,
        }
    }
}

fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl MarketDataPort for SyntheticDataAdapter {
    fn fetch_daily(&self) -> Result<Vec<PricePoint>, TradelabError> {
        if self.start_price <= 0.0 {
            return Err(TradelabError::Data {
                reason: "synthetic start price must be positive".into(),
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut bars = Vec::with_capacity(self.days);
        let mut close = self.start_price;
        let mut date = self.start_date;

        while bars.len() < self.days {
            if !is_trading_day(date) {
                date = date.succ_opt().ok_or_else(|| TradelabError::Data {
                    reason: "synthetic date range overflow".into(),
                })?;
                continue;
            }

            let open = close;
            let drift: f64 = rng.gen_range(-0.03..0.03);
            close = (open * (1.0 + drift)).max(0.01);
            let spread_up: f64 = rng.gen_range(0.0..0.01);
            let spread_down: f64 = rng.gen_range(0.0..0.01);
            let high = open.max(close) * (1.0 + spread_up);
            let low = (open.min(close) * (1.0 - spread_down)).max(0.01);
            let volume = rng.gen_range(10_000.0..500_000.0_f64).round();

            bars.push(PricePoint {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
            date = date.succ_opt().ok_or_else(|| TradelabError::Data {
                reason: "synthetic date range overflow".into(),
            })?;
        }

        Ok(bars)
    }
}
