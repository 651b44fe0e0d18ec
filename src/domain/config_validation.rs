//! Build and validate a [`StrategyConfig`] from a [`ConfigPort`].

use crate::domain::error::TradelabError;
use crate::domain::strategy::{StrategyConfig, StrategyMode};
use crate::ports::config_port::ConfigPort;

const SECTION: &str = "strategy";

/// Read the `[strategy]` section into a `StrategyConfig` and run the
/// engine's fail-fast validation. Missing keys take defaults; present but
/// out-of-range values are errors, never clamped.
pub fn strategy_from_config(config: &dyn ConfigPort) -> Result<StrategyConfig, TradelabError> {
    let strategy = StrategyConfig {
        mode: parse_mode(config)?,
        initial_capital: config.get_double(SECTION, "initial_capital", 10_000.0),
        short_window: parse_window(config, "short_window", 5)?,
        long_window: parse_window(config, "long_window", 20)?,
        rsi_period: parse_window(config, "rsi_period", 14)?,
        rsi_overbought: config.get_double(SECTION, "rsi_overbought", 70.0),
        rsi_oversold: config.get_double(SECTION, "rsi_oversold", 30.0),
        use_rsi_filter: config.get_bool(SECTION, "use_rsi_filter", false),
    };
    strategy.validate()?;
    Ok(strategy)
}

fn parse_mode(config: &dyn ConfigPort) -> Result<StrategyMode, TradelabError> {
    match config.get_string(SECTION, "mode") {
        None => Ok(StrategyMode::Algo),
        Some(s) => match s.to_lowercase().as_str() {
            "algo" => Ok(StrategyMode::Algo),
            "ai" => Ok(StrategyMode::Ai),
            other => Err(TradelabError::ConfigInvalid {
                section: SECTION.to_string(),
                key: "mode".to_string(),
                reason: format!("unknown mode '{}', expected 'algo' or 'ai'", other),
            }),
        },
    }
}

fn parse_window(
    config: &dyn ConfigPort,
    key: &str,
    default: i64,
) -> Result<usize, TradelabError> {
    let value = config.get_int(SECTION, key, default);
    usize::try_from(value).map_err(|_| TradelabError::ConfigInvalid {
        section: SECTION.to_string(),
        key: key.to_string(),
        reason: format!("{} must be a positive integer, got {}", key, value),
    })
}
