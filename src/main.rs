//! Debt Payoff CLI
//!
//! Reads a CSV of credit accounts, simulates paying them all off, and
//! writes either the month-by-month payment schedule or a payoff summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv > schedule.csv
//! cargo run -- accounts.csv --summary > summary.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity
//! - `PAYOFF_MAX_MONTHS`: Abandon runs that have not finished after this many months

use debt_payoff::{report, PayoffError, PayoffSimulator, Portfolio, Result, SimulationConfig};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut input_path = None;
    let mut summary = false;
    for arg in env::args().skip(1) {
        if arg == "--summary" {
            summary = true;
        } else if arg.starts_with("--") || input_path.is_some() {
            return Err(PayoffError::UnknownArgument(arg));
        } else {
            input_path = Some(arg);
        }
    }
    let input_path = input_path.ok_or(PayoffError::MissingArgument)?;

    let config = SimulationConfig::from_env()?;
    let file = File::open(&input_path)?;
    let mut portfolio = Portfolio::from_csv(BufReader::new(file))?;

    let simulation = PayoffSimulator::new(config).run(&mut portfolio)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    if summary {
        report::write_summary(&simulation, handle)?;
    } else {
        report::write_schedule(&portfolio, handle)?;
    }

    Ok(())
}
