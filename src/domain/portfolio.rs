//! Single-position portfolio state walked forward by the simulator.
//!
//! The book has exactly two states: FLAT (no holdings) and LONG (fully
//! invested). A buy while long or a sell while flat is silently dropped.
//! Buys commit a fixed 99% of available cash; sells always liquidate the
//! whole position. Both execute at the bar's close.

use chrono::NaiveDate;

/// Fraction of available cash committed on a buy. The remaining 1% is a
/// flat reserve standing in for fees and rounding slack; it is not
/// user-configurable.
pub const CASH_COMMIT_FACTOR: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    Buy,
    Sell,
}

/// One executed trade. Appended by the simulator, never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub date: NaiveDate,
    pub kind: TradeKind,
    pub price: f64,
    /// Asset units bought or sold.
    pub amount: f64,
    /// Total equity (cash + holdings at this bar's close) after the trade.
    pub balance_after: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub cash: f64,
    pub holdings: f64,
    pub initial_capital: f64,
    pub peak_equity: f64,
    pub max_drawdown: f64,
    pub trades: Vec<Trade>,
    pub equity_curve: Vec<EquityPoint>,
}

impl Portfolio {
    pub fn new(initial_capital: f64) -> Self {
        Portfolio {
            cash: initial_capital,
            holdings: 0.0,
            initial_capital,
            peak_equity: initial_capital,
            max_drawdown: 0.0,
            trades: Vec::new(),
            equity_curve: Vec::new(),
        }
    }

    pub fn is_flat(&self) -> bool {
        self.holdings == 0.0
    }

    pub fn equity(&self, price: f64) -> f64 {
        self.cash + self.holdings * price
    }

    /// Execute a buy at `price` if the book is flat and cash covers at
    /// least one unit's price. Returns whether a trade was recorded.
    pub fn buy(&mut self, date: NaiveDate, price: f64, reason: &str) -> bool {
        if !self.is_flat() || self.cash <= price {
            return false;
        }

        let spend = self.cash * CASH_COMMIT_FACTOR;
        self.cash -= spend;
        let amount = spend / price;
        self.holdings += amount;

        self.trades.push(Trade {
            date,
            kind: TradeKind::Buy,
            price,
            amount,
            balance_after: self.equity(price),
            reason: reason.to_string(),
        });
        true
    }

    /// Liquidate the whole position at `price` if any is held. Partial
    /// sells are not supported. Returns whether a trade was recorded.
    pub fn sell(&mut self, date: NaiveDate, price: f64, reason: &str) -> bool {
        if self.holdings <= 0.0 {
            return false;
        }

        let amount = self.holdings;
        self.cash += amount * price;
        self.holdings = 0.0;

        self.trades.push(Trade {
            date,
            kind: TradeKind::Sell,
            price,
            amount,
            balance_after: self.equity(price),
            reason: reason.to_string(),
        });
        true
    }

    /// Record the bar's closing equity and advance the running peak and
    /// max drawdown. Called once per bar after the decision is applied.
    pub fn mark(&mut self, date: NaiveDate, price: f64) {
        let equity = self.equity(price);
        self.equity_curve.push(EquityPoint {
            date,
            balance: equity,
        });
        if equity > self.peak_equity {
            self.peak_equity = equity;
        }
        let drawdown = (self.peak_equity - equity) / self.peak_equity;
        if drawdown > self.max_drawdown {
            self.max_drawdown = drawdown;
        }
    }
}
