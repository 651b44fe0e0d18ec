use clap::Parser;
use tradelab::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
