//! CSV external signal adapter.
//!
//! Expects a header row and `date,action,reason,confidence` columns.
//! Malformed rows — unparseable date, unknown action token, out-of-range
//! confidence — are skipped, never fatal: an unknown date simply never
//! matches a bar and resolves to Hold downstream.

use crate::domain::error::TradelabError;
use crate::domain::signal::{Signal, SignalAction, SignalMap};
use crate::ports::signal_port::SignalPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvSignalAdapter {
    path: PathBuf,
}

impl CsvSignalAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parse signal rows from raw CSV content, dropping malformed rows.
    pub fn parse(content: &str) -> SignalMap {
        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut map = SignalMap::new();

        for record in rdr.records().flatten() {
            let Some(signal) = parse_row(&record) else {
                continue;
            };
            map.insert(signal.date, signal);
        }

        map
    }
}

fn parse_row(record: &csv::StringRecord) -> Option<Signal> {
    let date = NaiveDate::parse_from_str(record.get(0)?.trim(), "%Y-%m-%d").ok()?;
    let action = match record.get(1)?.trim().to_uppercase().as_str() {
        "BUY" => SignalAction::Buy,
        "SELL" => SignalAction::Sell,
        _ => return None,
    };
    let reason = record.get(2).unwrap_or("").trim().to_string();
    let confidence = match record.get(3).map(str::trim) {
        None | Some("") => None,
        Some(raw) => {
            let value: f64 = raw.parse().ok()?;
            if !(0.0..=100.0).contains(&value) {
                return None;
            }
            Some(value)
        }
    };

    Some(Signal {
        date,
        action,
        reason,
        confidence,
    })
}

impl SignalPort for CsvSignalAdapter {
    fn fetch_signals(&self) -> Result<SignalMap, TradelabError> {
        let content = fs::read_to_string(&self.path).map_err(|e| TradelabError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        Ok(Self::parse(&content))
    }
}
