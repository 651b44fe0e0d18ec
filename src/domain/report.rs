//! Final summary statistics for one backtest run.

use crate::domain::portfolio::{EquityPoint, Portfolio, Trade, TradeKind};

/// The result handed back to the caller. Owned by the caller; the engine
/// keeps no state between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestResult {
    /// Chronological trade list.
    pub trades: Vec<Trade>,
    pub final_balance: f64,
    pub total_return_pct: f64,
    pub win_rate_pct: f64,
    pub max_drawdown_pct: f64,
    /// Per-bar equity, one point per input bar.
    pub history: Vec<EquityPoint>,
}

/// Reduce the walked portfolio into the summary report. `last_close` is
/// the close of the final bar; open positions are valued at it but never
/// auto-closed.
pub fn summarize(portfolio: Portfolio, last_close: f64) -> BacktestResult {
    let final_balance = portfolio.equity(last_close);
    let total_return_pct =
        (final_balance - portfolio.initial_capital) / portfolio.initial_capital * 100.0;
    let win_rate_pct = win_rate_pct(&portfolio.trades);
    let max_drawdown_pct = portfolio.max_drawdown * 100.0;

    BacktestResult {
        trades: portfolio.trades,
        final_balance,
        total_return_pct,
        win_rate_pct,
        max_drawdown_pct,
        history: portfolio.equity_curve,
    }
}

/// Percentage of sells that beat their entry. Each sell is paired with the
/// nearest preceding buy by a backward scan; with the single-position book
/// the trade list alternates, so the scan is short in practice (worst case
/// O(n^2) over the trade list, fine at backtest scale). No sells means 0,
/// not NaN.
fn win_rate_pct(trades: &[Trade]) -> f64 {
    let mut sells = 0usize;
    let mut profitable = 0usize;

    for (i, trade) in trades.iter().enumerate() {
        if trade.kind != TradeKind::Sell {
            continue;
        }
        sells += 1;
        let entry = trades[..i]
            .iter()
            .rev()
            .find(|t| t.kind == TradeKind::Buy);
        if let Some(buy) = entry {
            if trade.price > buy.price {
                profitable += 1;
            }
        }
    }

    if sells == 0 {
        0.0
    } else {
        profitable as f64 / sells as f64 * 100.0
    }
}
