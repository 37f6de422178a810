//! Run results and their CSV rendering.

use crate::decimal::Decimal4;
use crate::error::Result;
use crate::portfolio::Portfolio;
use serde::Serialize;
use std::io::Write;

/// Emitted when an account is flagged paid off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoffEvent {
    /// Identifier of the settled account.
    pub account: String,

    /// Month in which the account was flagged settled.
    pub months_to_payoff: u32,

    /// The account's fixed monthly payment.
    pub payment: Decimal4,

    /// Interest charged to this account over the whole run.
    pub total_interest: Decimal4,
}

/// Aggregate outcome of a completed payoff run.
///
/// Per-month detail lives in each ledger's history; see [`write_schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    /// Last month processed; the month the final account was flagged settled.
    pub months_elapsed: u32,

    /// Interest charged across all accounts and months.
    pub total_interest: Decimal4,

    /// Payoff events in the order they happened.
    pub payoffs: Vec<PayoffEvent>,
}

impl SimulationReport {
    /// Looks up the payoff event for an account.
    pub fn payoff(&self, account: &str) -> Option<&PayoffEvent> {
        self.payoffs.iter().find(|p| p.account == account)
    }
}

/// Writes every account's payment history as CSV.
///
/// Rows are grouped per account in portfolio order, then in the order the
/// entries were recorded. Balances are already clamped to zero.
pub fn write_schedule<W: Write>(portfolio: &Portfolio, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["account", "month", "interest", "payment", "balance"])?;

    for account in portfolio.accounts() {
        for entry in account.history() {
            csv_writer.write_record([
                account.identifier.clone(),
                entry.month.to_string(),
                entry.interest.to_string(),
                entry.payment.to_string(),
                entry.balance.to_string(),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes one row per payoff event followed by a `total` row carrying the
/// run-wide interest figure.
pub fn write_summary<W: Write>(report: &SimulationReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["account", "months_to_payoff", "payment", "total_interest"])?;

    for payoff in &report.payoffs {
        csv_writer.write_record([
            payoff.account.clone(),
            payoff.months_to_payoff.to_string(),
            payoff.payment.to_string(),
            payoff.total_interest.to_string(),
        ])?;
    }

    csv_writer.write_record(["total", "", "", &report.total_interest.to_string()])?;

    csv_writer.flush()?;
    Ok(())
}
