//! The backtest engine: one synchronous forward pass over the series.
//!
//! `run_backtest` is a pure function of (series, config, optional external
//! signals); identical inputs produce bit-identical results. All I/O —
//! fetching price data, resolving external signals — happens in the
//! adapters before this is called.

use crate::domain::error::TradelabError;
use crate::domain::indicator::rsi::compute_rsi;
use crate::domain::indicator::sma::compute_sma;
use crate::domain::ohlcv::PricePoint;
use crate::domain::portfolio::Portfolio;
use crate::domain::report::{summarize, BacktestResult};
use crate::domain::signal::{resolve_signals, Decision, IndicatorSet, SignalMap};
use crate::domain::strategy::StrategyConfig;

pub fn run_backtest(
    bars: &[PricePoint],
    config: &StrategyConfig,
    external: Option<&SignalMap>,
) -> Result<BacktestResult, TradelabError> {
    config.validate()?;
    let Some(last_bar) = bars.last() else {
        return Err(TradelabError::InvalidInput {
            reason: "empty price series".to_string(),
        });
    };

    let indicators = IndicatorSet {
        sma_short: compute_sma(bars, config.short_window),
        sma_long: compute_sma(bars, config.long_window),
        rsi: compute_rsi(bars, config.rsi_period),
    };
    let decisions = resolve_signals(bars, config, &indicators, external);

    let mut portfolio = Portfolio::new(config.initial_capital);
    for (bar, decision) in bars.iter().zip(&decisions) {
        match decision {
            Decision::Buy { reason } => {
                portfolio.buy(bar.date, bar.close, reason);
            }
            Decision::Sell { reason } => {
                portfolio.sell(bar.date, bar.close, reason);
            }
            Decision::Hold => {}
        }
        portfolio.mark(bar.date, bar.close);
    }

    Ok(summarize(portfolio, last_bar.close))
}
