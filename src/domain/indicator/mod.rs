//! Technical indicator value model.
//!
//! Indicator output is always index-aligned with the input bar series:
//! one [`IndicatorPoint`] per bar, with `valid = false` during the warm-up
//! stretch where there is not yet enough history.

pub mod sma;
pub mod rsi;

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
    Rsi(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub indicator_type: IndicatorType,
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Value at `index`, or `None` while the indicator is still warming up
    /// or the index is out of range.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        match self.values.get(index) {
            Some(p) if p.valid => Some(p.value),
            _ => None,
        }
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(window) => write!(f, "SMA({})", window),
            IndicatorType::Rsi(period) => write!(f, "RSI({})", period),
        }
    }
}
