//! Core engine types and logic.

pub mod ohlcv;
pub mod indicator;
pub mod signal;
pub mod portfolio;
pub mod backtest;
pub mod report;
pub mod strategy;
pub mod config_validation;
pub mod error;
