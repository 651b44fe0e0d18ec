//! CSV file market data adapter.
//!
//! Expects a header row and `date,open,high,low,close,volume` columns with
//! `%Y-%m-%d` dates. Rows are sorted by date on the way out.

use crate::domain::error::TradelabError;
use crate::domain::ohlcv::PricePoint;
use crate::ports::data_port::MarketDataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvDataAdapter {
    path: PathBuf,
}

impl CsvDataAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

fn get_field(record: &csv::StringRecord, index: usize, name: &str) -> Result<f64, TradelabError> {
    record
        .get(index)
        .ok_or_else(|| TradelabError::Data {
            reason: format!("missing {} column", name),
        })?
        .trim()
        .parse()
        .map_err(|e| TradelabError::Data {
            reason: format!("invalid {} value: {}", name, e),
        })
}

impl MarketDataPort for CsvDataAdapter {
    fn fetch_daily(&self) -> Result<Vec<PricePoint>, TradelabError> {
        let content = fs::read_to_string(&self.path).map_err(|e| TradelabError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| TradelabError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| TradelabError::Data {
                reason: "missing date column".into(),
            })?;
            let date =
                NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
                    TradelabError::Data {
                        reason: format!("invalid date '{}': {}", date_str, e),
                    }
                })?;

            bars.push(PricePoint {
                date,
                open: get_field(&record, 1, "open")?,
                high: get_field(&record, 2, "high")?,
                low: get_field(&record, 3, "low")?,
                close: get_field(&record, 4, "close")?,
                volume: get_field(&record, 5, "volume")?,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_csv(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prices.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn fetch_daily_parses_rows() {
        let (_dir, path) = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-15,100.0,110.0,90.0,105.0,50000\n\
             2024-01-16,105.0,115.0,100.0,110.0,60000\n",
        );
        let adapter = CsvDataAdapter::new(path);
        let bars = adapter.fetch_daily().unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!((bars[0].open - 100.0).abs() < f64::EPSILON);
        assert!((bars[0].close - 105.0).abs() < f64::EPSILON);
        assert!((bars[0].volume - 50_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fetch_daily_sorts_by_date() {
        let (_dir, path) = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-17,1,1,1,3.0,0\n\
             2024-01-15,1,1,1,1.0,0\n\
             2024-01-16,1,1,1,2.0,0\n",
        );
        let adapter = CsvDataAdapter::new(path);
        let bars = adapter.fetch_daily().unwrap();

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn missing_file_is_data_error() {
        let adapter = CsvDataAdapter::new(PathBuf::from("/nonexistent/prices.csv"));
        let err = adapter.fetch_daily().unwrap_err();
        assert!(matches!(err, TradelabError::Data { .. }));
    }

    #[test]
    fn bad_date_is_data_error() {
        let (_dir, path) = write_csv(
            "date,open,high,low,close,volume\n\
             15/01/2024,1,1,1,1,0\n",
        );
        let adapter = CsvDataAdapter::new(path);
        assert!(adapter.fetch_daily().is_err());
    }

    #[test]
    fn bad_number_is_data_error() {
        let (_dir, path) = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-15,1,1,1,abc,0\n",
        );
        let adapter = CsvDataAdapter::new(path);
        assert!(adapter.fetch_daily().is_err());
    }

    #[test]
    fn header_only_yields_empty_series() {
        let (_dir, path) = write_csv("date,open,high,low,close,volume\n");
        let adapter = CsvDataAdapter::new(path);
        let bars = adapter.fetch_daily().unwrap();
        assert!(bars.is_empty());
    }
}
