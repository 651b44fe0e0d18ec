//! External signal provider port trait.
//!
//! Providers (AI or rule-based) must resolve fully before the engine runs;
//! the engine consumes the returned map as an immutable lookup table and
//! has no timeout or retry policy of its own.

use crate::domain::error::TradelabError;
use crate::domain::signal::SignalMap;

pub trait SignalPort {
    fn fetch_signals(&self) -> Result<SignalMap, TradelabError>;
}
