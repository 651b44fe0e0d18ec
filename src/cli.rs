//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvDataAdapter;
use crate::adapters::csv_signal_adapter::CsvSignalAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::synthetic_adapter::SyntheticDataAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::backtest::run_backtest;
use crate::domain::config_validation::strategy_from_config;
use crate::domain::error::TradelabError;
use crate::domain::signal::SignalMap;
use crate::domain::strategy::StrategyMode;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::MarketDataPort;
use crate::ports::report_port::ReportPort;
use crate::ports::signal_port::SignalPort;

#[derive(Parser, Debug)]
#[command(name = "tradelab", about = "Trading strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// OHLCV CSV file; synthetic data is generated when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// External signal CSV file (ai mode)
        #[arg(short, long)]
        signals: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a strategy configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Write a synthetic OHLCV CSV file
    Generate {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 180)]
        days: usize,
        #[arg(long, default_value_t = 100.0)]
        start_price: f64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value = "2024-01-01")]
        start_date: NaiveDate,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            data,
            signals,
            output,
        } => run_backtest_command(&config, data.as_ref(), signals.as_ref(), output.as_ref()),
        Command::Validate { config } => run_validate(&config),
        Command::Generate {
            output,
            days,
            start_price,
            seed,
            start_date,
        } => run_generate(&output, days, start_price, seed, start_date),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TradelabError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_backtest_command(
    config_path: &PathBuf,
    data_path: Option<&PathBuf>,
    signals_path: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let strategy = match strategy_from_config(&adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let bars = match fetch_bars(&adapter, data_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} bars", bars.len());

    let signal_map: Option<SignalMap> = if strategy.mode == StrategyMode::Ai {
        let resolved_path = signals_path
            .cloned()
            .or_else(|| adapter.get_string("data", "signals_path").map(PathBuf::from));
        match resolved_path {
            Some(path) => {
                eprintln!("Loading signals from {}", path.display());
                match CsvSignalAdapter::new(path).fetch_signals() {
                    Ok(map) => Some(map),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return (&e).into();
                    }
                }
            }
            None => {
                eprintln!("warning: ai mode without signals, every bar resolves to hold");
                None
            }
        }
    } else {
        None
    };

    let result = match run_backtest(&bars, &strategy, signal_map.as_ref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let report = match TextReportAdapter.render(&result, &strategy) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &report) {
                let err = TradelabError::Io(e);
                eprintln!("error: {err}");
                return (&err).into();
            }
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }

    ExitCode::SUCCESS
}

fn fetch_bars(
    adapter: &FileConfigAdapter,
    data_path: Option<&PathBuf>,
) -> Result<Vec<crate::domain::ohlcv::PricePoint>, TradelabError> {
    let resolved_path = data_path
        .cloned()
        .or_else(|| adapter.get_string("data", "csv_path").map(PathBuf::from));

    match resolved_path {
        Some(path) => {
            eprintln!("Loading prices from {}", path.display());
            CsvDataAdapter::new(path).fetch_daily()
        }
        None => {
            let generator = synthetic_from_config(adapter)?;
            eprintln!(
                "No price file configured, generating {} synthetic bars (seed {})",
                generator.days, generator.seed
            );
            generator.fetch_daily()
        }
    }
}

fn synthetic_from_config(
    adapter: &FileConfigAdapter,
) -> Result<SyntheticDataAdapter, TradelabError> {
    let start_date = match adapter.get_string("data", "start_date") {
        None => NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
            TradelabError::ConfigInvalid {
                section: "data".to_string(),
                key: "start_date".to_string(),
                reason: "expected YYYY-MM-DD".to_string(),
            }
        })?,
    };

    let days = adapter.get_int("data", "days", 180);
    let days = usize::try_from(days).map_err(|_| TradelabError::ConfigInvalid {
        section: "data".to_string(),
        key: "days".to_string(),
        reason: format!("days must be non-negative, got {}", days),
    })?;

    let seed = adapter.get_int("data", "seed", 42);
    let seed = u64::try_from(seed).map_err(|_| TradelabError::ConfigInvalid {
        section: "data".to_string(),
        key: "seed".to_string(),
        reason: format!("seed must be non-negative, got {}", seed),
    })?;

    Ok(SyntheticDataAdapter::new(
        start_date,
        days,
        adapter.get_double("data", "start_price", 100.0),
        seed,
    ))
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match strategy_from_config(&adapter) {
        Ok(strategy) => {
            println!(
                "config ok: mode={}, warmup={} bars",
                match strategy.mode {
                    StrategyMode::Algo => "algo",
                    StrategyMode::Ai => "ai",
                },
                strategy.warmup_bars()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_generate(
    output: &PathBuf,
    days: usize,
    start_price: f64,
    seed: u64,
    start_date: NaiveDate,
) -> ExitCode {
    let generator = SyntheticDataAdapter::new(start_date, days, start_price, seed);
    let bars = match generator.fetch_daily() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let mut content = String::from("date,open,high,low,close,volume\n");
    for bar in &bars {
        content.push_str(&format!(
            "{},{:.4},{:.4},{:.4},{:.4},{}\n",
            bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
        ));
    }

    if let Err(e) = fs::write(output, content) {
        let err = TradelabError::Io(e);
        eprintln!("error: {err}");
        return (&err).into();
    }

    eprintln!("Wrote {} bars to {}", bars.len(), output.display());
    ExitCode::SUCCESS
}
