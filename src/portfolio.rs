//! Ordered collection of account ledgers.

use crate::account::AccountLedger;
use crate::error::{PayoffError, Result};
use crate::input::{AccountInput, AccountRecord};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::collections::HashSet;
use std::io::Read;

/// The accounts being paid down together, in input order.
///
/// Order matters: it decides which accounts share a surplus when several
/// settle in the same month.
#[derive(Debug, Clone)]
pub struct Portfolio {
    accounts: Vec<AccountLedger>,
}

impl Portfolio {
    /// Builds a portfolio from validated inputs.
    ///
    /// Fails with `EmptyPortfolio` for no inputs and `InvalidAccountInput`
    /// for the first out-of-range account.
    pub fn new(inputs: Vec<AccountInput>) -> Result<Self> {
        if inputs.is_empty() {
            return Err(PayoffError::EmptyPortfolio);
        }

        {
            let mut seen = HashSet::new();
            for input in &inputs {
                input.validate()?;
                if !seen.insert(input.identifier.as_str()) {
                    warn!("Duplicate account identifier '{}'", input.identifier);
                }
            }
        }

        Ok(Portfolio {
            accounts: inputs.into_iter().map(AccountLedger::new).collect(),
        })
    }

    /// Reads accounts from CSV with header `account,balance,apr,payment`.
    ///
    /// Unlike a best-effort import, any bad row rejects the whole file: a
    /// payoff plan missing one of the accounts would be misleading.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let mut inputs = Vec::new();
        for (row_idx, result) in csv_reader.deserialize::<AccountRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = result.map_err(|e| PayoffError::InvalidRecord {
                row: row_num,
                message: e.to_string(),
            })?;
            let input = record.parse(row_num)?;
            debug!(
                "Row {}: account '{}' balance {} apr {} payment {}",
                row_num, input.identifier, input.balance, input.annual_rate, input.payment
            );
            inputs.push(input);
        }

        Self::new(inputs)
    }

    /// All ledgers in portfolio order.
    pub fn accounts(&self) -> &[AccountLedger] {
        &self.accounts
    }

    pub(crate) fn accounts_mut(&mut self) -> &mut [AccountLedger] {
        &mut self.accounts
    }

    /// Looks up a ledger by identifier. Returns the first match.
    pub fn get(&self, identifier: &str) -> Option<&AccountLedger> {
        self.accounts.iter().find(|a| a.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Indices of accounts not yet flagged settled, in portfolio order.
    pub fn open_indices(&self) -> Vec<usize> {
        self.accounts
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.is_settled())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Returns `true` once every account is flagged settled.
    pub fn is_debt_free(&self) -> bool {
        self.accounts.iter().all(|a| a.is_settled())
    }
}
