//! Account input models for CSV parsing and validation.

use crate::decimal::Decimal4;
use crate::error::{PayoffError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Raw account record as read from CSV.
///
/// Numeric fields are kept as strings so that a bad value can be reported
/// with its row and column instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    /// Account label
    pub account: String,

    /// Current balance owed
    pub balance: String,

    /// Annual percentage rate, e.g. `22.99`
    pub apr: String,

    /// Fixed monthly payment
    pub payment: String,
}

impl AccountRecord {
    /// Parses and validates the raw record.
    ///
    /// Unparsable numbers yield `InvalidRecord`; parsable but out-of-range
    /// values yield `InvalidAccountInput`.
    pub fn parse(&self, row: usize) -> Result<AccountInput> {
        let identifier = self.account.trim().to_string();
        if identifier.is_empty() {
            return Err(PayoffError::InvalidRecord {
                row,
                message: "account identifier is empty".to_string(),
            });
        }

        let input = AccountInput {
            balance: parse_money(row, "balance", &self.balance)?,
            annual_rate: parse_field(row, "apr", &self.apr)?,
            payment: parse_money(row, "payment", &self.payment)?,
            identifier,
        };

        input.validate()?;
        Ok(input)
    }
}

fn parse_field(row: usize, name: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PayoffError::InvalidRecord {
            row,
            message: format!("missing {}", name),
        });
    }
    Decimal::from_str(trimmed).map_err(|e| PayoffError::InvalidRecord {
        row,
        message: format!("invalid {} '{}': {}", name, trimmed, e),
    })
}

/// Parses a money field, refusing precision `Decimal4` would round away.
fn parse_money(row: usize, name: &str, raw: &str) -> Result<Decimal4> {
    let value = parse_field(row, name, raw)?;
    if value.normalize().scale() > Decimal4::SCALE {
        return Err(PayoffError::InvalidRecord {
            row,
            message: format!(
                "{} '{}' has more than {} decimal places",
                name,
                raw.trim(),
                Decimal4::SCALE
            ),
        });
    }
    Ok(Decimal4::new(value))
}

/// A validated account ready to become a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInput {
    /// Reporting label
    pub identifier: String,

    /// Balance owed, `>= 0`
    pub balance: Decimal4,

    /// Annual percentage rate, `>= 0`
    pub annual_rate: Decimal,

    /// Monthly payment, `> 0`
    pub payment: Decimal4,
}

impl AccountInput {
    /// Largest accepted balance or payment, in whole currency units.
    pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

    /// Largest accepted annual percentage rate.
    pub const MAX_APR: i64 = 1_000;

    /// Creates an input from already-typed values. Call [`validate`](Self::validate)
    /// or build a [`Portfolio`](crate::Portfolio) to check it.
    pub fn new(
        identifier: impl Into<String>,
        balance: Decimal4,
        annual_rate: Decimal,
        payment: Decimal4,
    ) -> Self {
        AccountInput {
            identifier: identifier.into(),
            balance,
            annual_rate,
            payment,
        }
    }

    /// Rejects negative balances, negative rates and non-positive payments,
    /// and anything above [`MAX_AMOUNT`](Self::MAX_AMOUNT) or
    /// [`MAX_APR`](Self::MAX_APR). The bounds keep every monthly product and
    /// running total well inside `Decimal`'s range.
    pub fn validate(&self) -> Result<()> {
        let max_amount = Decimal4::new(Decimal::from(Self::MAX_AMOUNT));
        let max_apr = Decimal::from(Self::MAX_APR);

        let message = if self.balance < Decimal4::ZERO {
            format!("balance {} is negative", self.balance)
        } else if self.balance > max_amount {
            format!("balance {} exceeds {}", self.balance, max_amount)
        } else if self.annual_rate < Decimal::ZERO {
            format!("apr {} is negative", self.annual_rate)
        } else if self.annual_rate > max_apr {
            format!("apr {} exceeds {}", self.annual_rate, max_apr)
        } else if !self.payment.is_positive() {
            format!("payment {} must be greater than zero", self.payment)
        } else if self.payment > max_amount {
            format!("payment {} exceeds {}", self.payment, max_amount)
        } else {
            return Ok(());
        };

        Err(PayoffError::InvalidAccountInput {
            account: self.identifier.clone(),
            message,
        })
    }
}
