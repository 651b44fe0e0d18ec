//! Strategy configuration for a single backtest run.

use crate::domain::error::TradelabError;

/// How trading decisions are produced: crossover rules computed from the
/// series, or an externally supplied per-date signal map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyMode {
    Algo,
    Ai,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyConfig {
    pub mode: StrategyMode,
    pub initial_capital: f64,
    pub short_window: usize,
    pub long_window: usize,
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub use_rsi_filter: bool,
}

impl StrategyConfig {
    /// Fail-fast validation, run before the simulation loop. Out-of-range
    /// values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), TradelabError> {
        if self.initial_capital <= 0.0 {
            return Err(invalid("initial_capital", "must be positive"));
        }
        if self.short_window == 0 {
            return Err(invalid("short_window", "must be a positive integer"));
        }
        if self.long_window == 0 {
            return Err(invalid("long_window", "must be a positive integer"));
        }
        if self.rsi_period == 0 {
            return Err(invalid("rsi_period", "must be a positive integer"));
        }
        if !(0.0..=100.0).contains(&self.rsi_overbought) {
            return Err(invalid("rsi_overbought", "must be between 0 and 100"));
        }
        if !(0.0..=100.0).contains(&self.rsi_oversold) {
            return Err(invalid("rsi_oversold", "must be between 0 and 100"));
        }
        Ok(())
    }

    /// Bars before this index have not warmed up the indicators; the
    /// resolver holds through them.
    pub fn warmup_bars(&self) -> usize {
        self.long_window.max(self.rsi_period)
    }
}

fn invalid(field: &str, reason: &str) -> TradelabError {
    TradelabError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
