//! Report rendering port trait.

use crate::domain::error::TradelabError;
use crate::domain::report::BacktestResult;
use crate::domain::strategy::StrategyConfig;

/// Port for rendering a finished backtest into a displayable form.
pub trait ReportPort {
    fn render(
        &self,
        result: &BacktestResult,
        config: &StrategyConfig,
    ) -> Result<String, TradelabError>;
}
