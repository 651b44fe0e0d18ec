//! CLI integration tests: full command dispatch against real files on disk.

mod common;

use std::fs;
use tradelab::cli::{run, Cli, Command};

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const ALGO_INI: &str = "\
[strategy]
mode = algo
initial_capital = 1000.0
short_window = 2
long_window = 3
rsi_period = 2
use_rsi_filter = false
";

const PRICES_CSV: &str = "\
date,open,high,low,close,volume
2024-01-01,100,100,100,100,1000
2024-01-02,102,102,102,102,1000
2024-01-03,101,101,101,101,1000
2024-01-04,105,105,105,105,1000
2024-01-05,95,95,95,95,1000
2024-01-06,96,96,96,96,1000
2024-01-07,130,130,130,130,1000
";

#[test]
fn backtest_command_writes_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_file(&dir, "config.ini", ALGO_INI);
    let data = write_file(&dir, "prices.csv", PRICES_CSV);
    let output = dir.path().join("report.txt");

    let _ = run(Cli {
        command: Command::Backtest {
            config,
            data: Some(data),
            signals: None,
            output: Some(output.clone()),
        },
    });

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("Backtest report"));
    assert!(report.contains("mode:            algo"));
    assert!(report.contains("trades:          1"));
    assert!(report.contains("golden cross"));
}

#[test]
fn backtest_command_ai_mode_with_signals() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.ini",
        "[strategy]\nmode = ai\ninitial_capital = 1000.0\n",
    );
    let data = write_file(&dir, "prices.csv", PRICES_CSV);
    let signals = write_file(
        &dir,
        "signals.csv",
        "date,action,reason,confidence\n\
         2024-01-01,BUY,entry call,70\n\
         2024-01-04,SELL,exit call,\n",
    );
    let output = dir.path().join("report.txt");

    let _ = run(Cli {
        command: Command::Backtest {
            config,
            data: Some(data),
            signals: Some(signals),
            output: Some(output.clone()),
        },
    });

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("mode:            ai"));
    assert!(report.contains("trades:          2"));
    assert!(report.contains("entry call"));
    assert!(report.contains("exit call"));
    assert!(report.contains("win rate:        100.00%"));
}

#[test]
fn backtest_command_rejects_bad_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.ini",
        "[strategy]\ninitial_capital = -100\n",
    );
    let data = write_file(&dir, "prices.csv", PRICES_CSV);
    let output = dir.path().join("report.txt");

    let _ = run(Cli {
        command: Command::Backtest {
            config,
            data: Some(data),
            signals: None,
            output: Some(output.clone()),
        },
    });

    assert!(!output.exists(), "no report should be written on config error");
}

#[test]
fn backtest_command_falls_back_to_synthetic_data() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.ini",
        "[strategy]\nmode = algo\n\n[data]\ndays = 60\nseed = 5\nstart_price = 50.0\n",
    );
    let output = dir.path().join("report.txt");

    let _ = run(Cli {
        command: Command::Backtest {
            config,
            data: None,
            signals: None,
            output: Some(output.clone()),
        },
    });

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("bars:            60"));
}

#[test]
fn backtest_command_rejects_negative_seed() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.ini",
        "[strategy]\nmode = algo\n\n[data]\ndays = 60\nseed = -1\n",
    );
    let output = dir.path().join("report.txt");

    let _ = run(Cli {
        command: Command::Backtest {
            config,
            data: None,
            signals: None,
            output: Some(output.clone()),
        },
    });

    assert!(!output.exists(), "no report should be written for a negative seed");
}

#[test]
fn generate_then_backtest_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let csv_path = dir.path().join("generated.csv");

    let _ = run(Cli {
        command: Command::Generate {
            output: csv_path.clone(),
            days: 90,
            start_price: 100.0,
            seed: 9,
            start_date: common::date(2024, 1, 1),
        },
    });

    let generated = fs::read_to_string(&csv_path).unwrap();
    assert!(generated.starts_with("date,open,high,low,close,volume"));
    assert_eq!(generated.lines().count(), 91); // header + 90 bars

    let config = write_file(&dir, "config.ini", ALGO_INI);
    let output = dir.path().join("report.txt");
    let _ = run(Cli {
        command: Command::Backtest {
            config,
            data: Some(csv_path),
            signals: None,
            output: Some(output.clone()),
        },
    });

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("bars:            90"));
}
