//! Simple moving average over closing prices.
//!
//! Warmup: the first `window - 1` entries are invalid. A window of zero, or
//! a window larger than the series, yields an all-invalid series rather
//! than an error ("insufficient history" is a valid outcome).

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::PricePoint;

pub fn compute_sma(bars: &[PricePoint], window: usize) -> IndicatorSeries {
    let mut values = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if window == 0 || i + 1 < window {
            values.push(IndicatorPoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
            continue;
        }
        let sum: f64 = bars[i + 1 - window..=i].iter().map(|b| b.close).sum();
        values.push(IndicatorPoint {
            date: bar.date,
            valid: true,
            value: sum / window as f64,
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Sma(window),
        values,
    }
}
