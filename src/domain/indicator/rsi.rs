//! RSI (Relative Strength Index) with Wilder's smoothing.
//!
//! - Seed at index `period`: simple mean of the first `period` day-over-day
//!   gains/losses, then `RSI = 100 - (100 / (1 + avg_gain / avg_loss))`.
//! - Recurrence: `avg = (prev_avg * (period - 1) + current) / period`.
//! - `avg_loss == 0` saturates RSI at exactly 100 instead of dividing by
//!   zero.
//!
//! Warmup: entries `0..=period-1` are invalid. A series no longer than
//! `period` bars yields an all-invalid output, not an error.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::PricePoint;

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}

pub fn compute_rsi(bars: &[PricePoint], period: usize) -> IndicatorSeries {
    if period == 0 || bars.len() <= period {
        let values = bars
            .iter()
            .map(|b| IndicatorPoint {
                date: b.date,
                valid: false,
                value: 0.0,
            })
            .collect();
        return IndicatorSeries {
            indicator_type: IndicatorType::Rsi(period),
            values,
        };
    }

    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);
    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut values = Vec::with_capacity(bars.len());
    for bar in &bars[..period] {
        values.push(IndicatorPoint {
            date: bar.date,
            valid: false,
            value: 0.0,
        });
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;
    values.push(IndicatorPoint {
        date: bars[period].date,
        valid: true,
        value: rsi_value(avg_gain, avg_loss),
    });

    for (i, bar) in bars.iter().enumerate().skip(period + 1) {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i - 1]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i - 1]) / period as f64;
        values.push(IndicatorPoint {
            date: bar.date,
            valid: true,
            value: rsi_value(avg_gain, avg_loss),
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Rsi(period),
        values,
    }
}
