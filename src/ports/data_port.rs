//! Market data port trait.
//!
//! Providers return an ordered daily series; the engine trusts the ordering
//! and bar invariants. All fetching (file, network, synthetic) happens
//! before the engine runs.

use crate::domain::error::TradelabError;
use crate::domain::ohlcv::PricePoint;

pub trait MarketDataPort {
    /// Fetch the daily series, ordered by ascending date.
    fn fetch_daily(&self) -> Result<Vec<PricePoint>, TradelabError>;
}
