//! # Debt Payoff
//!
//! Simulates paying down a set of revolving-credit balances month by month
//! until every one reaches zero, tracking the interest charged per account
//! and handing any overpayment to the accounts still open.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Money uses 4 decimal places via `rust_decimal`;
//!   rates keep full precision
//! - **Fixed payments**: Each account pays the same caller-supplied amount every month
//! - **Guarded termination**: Non-amortizing payments and runaway runs are errors,
//!   never infinite loops
//! - **Deterministic output**: Accounts are processed and reported in input order
//!
//! ## Example
//!
//! ```no_run
//! use debt_payoff::{report, PayoffSimulator, Portfolio, SimulationConfig};
//! use std::io::Cursor;
//!
//! let csv = "account,balance,apr,payment\nVisa,1000,22.99,75\n";
//! let mut portfolio = Portfolio::from_csv(Cursor::new(csv)).unwrap();
//! let summary = PayoffSimulator::new(SimulationConfig::default())
//!     .run(&mut portfolio)
//!     .unwrap();
//! report::write_schedule(&portfolio, std::io::stdout()).unwrap();
//! println!("Total interest paid: {}", summary.total_interest);
//! ```

pub mod account;
pub mod allocation;
pub mod config;
pub mod decimal;
pub mod error;
pub mod input;
pub mod portfolio;
pub mod report;
pub mod simulator;

pub use account::{AccountLedger, PaymentEntry};
pub use allocation::{EqualSplit, SurplusAllocator};
pub use config::SimulationConfig;
pub use decimal::Decimal4;
pub use error::{PayoffError, Result};
pub use input::{AccountInput, AccountRecord};
pub use portfolio::Portfolio;
pub use report::{PayoffEvent, SimulationReport};
pub use simulator::PayoffSimulator;
