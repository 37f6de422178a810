//! Error types for the payoff simulator.

use crate::decimal::Decimal4;
use thiserror::Error;

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, PayoffError>;

/// Errors that can occur while loading a portfolio or running a simulation.
#[derive(Error, Debug)]
pub enum PayoffError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row could not be read as an account record
    #[error("Invalid account record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Account values outside the accepted domain
    #[error("Invalid input for account '{account}': {message}")]
    InvalidAccountInput { account: String, message: String },

    /// No accounts were supplied
    #[error("No accounts to simulate")]
    EmptyPortfolio,

    /// Scheduled payment does not cover the interest charged that month
    #[error(
        "Payment of {payment} on account '{account}' does not exceed interest of {interest} in month {month}"
    )]
    NonAmortizingPayment {
        account: String,
        month: u32,
        interest: Decimal4,
        payment: Decimal4,
    },

    /// Unsettled accounts remain after the configured number of months
    #[error("Accounts still unsettled after {limit} months")]
    MonthLimitExceeded { limit: u32 },

    /// Bad configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: debt-payoff <accounts.csv> [--summary]")]
    MissingArgument,

    /// Unrecognized command-line argument
    #[error("Unknown argument '{0}'. Usage: debt-payoff <accounts.csv> [--summary]")]
    UnknownArgument(String),
}
