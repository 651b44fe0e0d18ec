//! Per-bar trading decisions.
//!
//! The resolver is a pure function over the bar series, pre-computed
//! indicators, and (in external mode) a date-keyed signal map. One
//! [`Decision`] is produced per bar index.
//!
//! Rule mode semantics:
//! - Buy on a golden cross: `prev_short <= prev_long && curr_short > curr_long`.
//! - Sell on a death cross: `prev_short >= prev_long && curr_short < curr_long`.
//! - With the RSI filter on, a buy additionally requires `RSI < oversold`,
//!   and a sell is forced whenever `RSI > overbought` even without a
//!   crossover. A simultaneous crossover sell and RSI-forced sell collapse
//!   into a single Sell.
//! - Bars before `max(long_window, rsi_period)` resolve to Hold.
//!
//! External mode: the decision for a bar is whatever the signal map holds
//! for that date; absent dates resolve to Hold.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::domain::indicator::IndicatorSeries;
use crate::domain::ohlcv::PricePoint;
use crate::domain::strategy::{StrategyConfig, StrategyMode};

pub const GOLDEN_CROSS_REASON: &str = "golden cross (short SMA over long SMA)";
pub const DEATH_CROSS_REASON: &str = "death cross (short SMA under long SMA)";
pub const RSI_EXIT_REASON: &str = "RSI overbought";

/// An externally supplied buy/sell call for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub date: NaiveDate,
    pub action: SignalAction,
    pub reason: String,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalAction {
    Buy,
    Sell,
}

/// Read-only, per-run lookup table for external mode.
pub type SignalMap = HashMap<NaiveDate, Signal>;

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Buy { reason: String },
    Sell { reason: String },
    Hold,
}

/// Indicators the resolver consumes, all index-aligned with the bar series.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    pub sma_short: IndicatorSeries,
    pub sma_long: IndicatorSeries,
    pub rsi: IndicatorSeries,
}

pub fn resolve_signals(
    bars: &[PricePoint],
    config: &StrategyConfig,
    indicators: &IndicatorSet,
    external: Option<&SignalMap>,
) -> Vec<Decision> {
    match config.mode {
        StrategyMode::Algo => (0..bars.len())
            .map(|i| resolve_rule(config, indicators, i))
            .collect(),
        StrategyMode::Ai => bars
            .iter()
            .map(|bar| resolve_external(bar.date, external))
            .collect(),
    }
}

fn resolve_rule(config: &StrategyConfig, indicators: &IndicatorSet, index: usize) -> Decision {
    if index < config.warmup_bars() || index == 0 {
        return Decision::Hold;
    }

    let (Some(prev_short), Some(curr_short), Some(prev_long), Some(curr_long)) = (
        indicators.sma_short.value_at(index - 1),
        indicators.sma_short.value_at(index),
        indicators.sma_long.value_at(index - 1),
        indicators.sma_long.value_at(index),
    ) else {
        // Indicators still undefined: cannot decide.
        return Decision::Hold;
    };

    let golden_cross = prev_short <= prev_long && curr_short > curr_long;
    let death_cross = prev_short >= prev_long && curr_short < curr_long;
    let rsi = indicators.rsi.value_at(index);

    if golden_cross {
        let rsi_allows = !config.use_rsi_filter
            || rsi.map_or(false, |r| r < config.rsi_oversold);
        if rsi_allows {
            return Decision::Buy {
                reason: GOLDEN_CROSS_REASON.to_string(),
            };
        }
    }

    if death_cross {
        return Decision::Sell {
            reason: DEATH_CROSS_REASON.to_string(),
        };
    }

    let rsi_forced = config.use_rsi_filter && rsi.map_or(false, |r| r > config.rsi_overbought);
    if rsi_forced {
        return Decision::Sell {
            reason: RSI_EXIT_REASON.to_string(),
        };
    }

    Decision::Hold
}

fn resolve_external(date: NaiveDate, external: Option<&SignalMap>) -> Decision {
    match external.and_then(|map| map.get(&date)) {
        Some(signal) => match signal.action {
            SignalAction::Buy => Decision::Buy {
                reason: signal.reason.clone(),
            },
            SignalAction::Sell => Decision::Sell {
                reason: signal.reason.clone(),
            },
        },
        None => Decision::Hold,
    }
}
