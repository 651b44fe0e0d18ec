//! Plain-text report adapter.

use crate::domain::error::TradelabError;
use crate::domain::portfolio::TradeKind;
use crate::domain::report::BacktestResult;
use crate::domain::strategy::{StrategyConfig, StrategyMode};
use crate::ports::report_port::ReportPort;
use std::fmt::Write;

pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn render(
        &self,
        result: &BacktestResult,
        config: &StrategyConfig,
    ) -> Result<String, TradelabError> {
        let mut out = String::new();

        let mode = match config.mode {
            StrategyMode::Algo => "algo",
            StrategyMode::Ai => "ai",
        };

        writeln!(out, "Backtest report").ok();
        writeln!(out, "===============").ok();
        writeln!(out, "mode:            {}", mode).ok();
        writeln!(out, "initial capital: {:.2}", config.initial_capital).ok();
        writeln!(out, "final balance:   {:.2}", result.final_balance).ok();
        writeln!(out, "total return:    {:.2}%", result.total_return_pct).ok();
        writeln!(out, "win rate:        {:.2}%", result.win_rate_pct).ok();
        writeln!(out, "max drawdown:    {:.2}%", result.max_drawdown_pct).ok();
        writeln!(out, "bars:            {}", result.history.len()).ok();
        writeln!(out, "trades:          {}", result.trades.len()).ok();

        if !result.trades.is_empty() {
            writeln!(out).ok();
            writeln!(out, "{:<12} {:<5} {:>12} {:>14} {:>14}  reason", "date", "side", "price", "amount", "balance").ok();
            for trade in &result.trades {
                let side = match trade.kind {
                    TradeKind::Buy => "BUY",
                    TradeKind::Sell => "SELL",
                };
                writeln!(
                    out,
                    "{:<12} {:<5} {:>12.4} {:>14.6} {:>14.2}  {}",
                    trade.date, side, trade.price, trade.amount, trade.balance_after, trade.reason
                )
                .ok();
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::backtest::run_backtest;
    use crate::domain::ohlcv::PricePoint;
    use chrono::NaiveDate;

    fn make_bars(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    fn config() -> StrategyConfig {
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

    #[test]
    fn render_includes_summary_lines() {
        let bars = make_bars(&[100.0, 102.0, 101.0, 105.0, 95.0, 96.0, 130.0]);
        let config = config();
        let result = run_backtest(&bars, &config, None).unwrap();

        let text = TextReportAdapter.render(&result, &config).unwrap();
        assert!(text.contains("mode:            algo"));
        assert!(text.contains("initial capital: 1000.00"));
        assert!(text.contains("trades:          1"));
        assert!(text.contains("BUY"));
        assert!(text.contains("golden cross"));
    }

    #[test]
    fn render_without_trades_omits_table() {
        let bars = make_bars(&[100.0, 100.0, 100.0]);
        let config = config();
        let result = run_backtest(&bars, &config, None).unwrap();

        let text = TextReportAdapter.render(&result, &config).unwrap();
        assert!(text.contains("trades:          0"));
        assert!(!text.contains("BUY"));
    }
}
