//! Month-by-month payoff simulation.
//!
//! Each month walks the portfolio in order. An open account with a positive
//! balance is charged interest and pays its fixed amount. An open account
//! whose balance has reached zero or below is flagged settled, and whatever
//! it overpaid is immediately redistributed to the accounts still open.
//! The run ends once every account is flagged settled.

use crate::account::AccountLedger;
use crate::allocation::{EqualSplit, SurplusAllocator};
use crate::config::SimulationConfig;
use crate::decimal::Decimal4;
use crate::error::{PayoffError, Result};
use crate::portfolio::Portfolio;
use crate::report::{PayoffEvent, SimulationReport};
use log::{debug, info};

/// Drives the monthly cycle over a [`Portfolio`].
///
/// # Redistribution Order
///
/// The set of open accounts is recomputed each time an account settles,
/// after that account is flagged. An account that reached zero earlier in
/// the same pass but sits later in portfolio order is still open at that
/// point, so it receives a share and passes it on when its own turn comes.
pub struct PayoffSimulator<A = EqualSplit> {
    config: SimulationConfig,
    allocator: A,
}

impl PayoffSimulator<EqualSplit> {
    /// Creates a simulator using equal-split redistribution.
    pub fn new(config: SimulationConfig) -> Self {
        PayoffSimulator {
            config,
            allocator: EqualSplit,
        }
    }
}

impl Default for PayoffSimulator<EqualSplit> {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl<A: SurplusAllocator> PayoffSimulator<A> {
    /// Creates a simulator with a custom redistribution strategy.
    pub fn with_allocator(config: SimulationConfig, allocator: A) -> Self {
        PayoffSimulator { config, allocator }
    }

    /// Runs the portfolio to completion, mutating its ledgers in place.
    ///
    /// Non-amortizing accounts are rejected before month 1 without touching
    /// any ledger. Errors raised once the cycle has started leave the
    /// portfolio as it was at the failing step.
    pub fn run(&self, portfolio: &mut Portfolio) -> Result<SimulationReport> {
        self.preflight(portfolio)?;

        let mut total_interest = Decimal4::ZERO;
        let mut payoffs = Vec::new();
        let mut month: u32 = 1;

        while !portfolio.is_debt_free() {
            if month > self.config.max_months {
                return Err(PayoffError::MonthLimitExceeded {
                    limit: self.config.max_months,
                });
            }
            total_interest += self.run_month(portfolio, month, &mut payoffs)?;
            month += 1;
        }

        let months_elapsed = month - 1;
        info!(
            "All {} accounts paid off after {} months, total interest {}",
            portfolio.len(),
            months_elapsed,
            total_interest
        );

        Ok(SimulationReport {
            months_elapsed,
            total_interest,
            payoffs,
        })
    }

    /// Rejects any account whose first payment would not cover its interest.
    fn preflight(&self, portfolio: &Portfolio) -> Result<()> {
        portfolio
            .accounts()
            .iter()
            .filter(|a| a.balance.is_positive())
            .try_for_each(|a| check_amortizes(a, 1))
    }

    /// Processes one month and returns the interest charged in it.
    fn run_month(
        &self,
        portfolio: &mut Portfolio,
        month: u32,
        payoffs: &mut Vec<PayoffEvent>,
    ) -> Result<Decimal4> {
        let mut month_interest = Decimal4::ZERO;

        for idx in 0..portfolio.len() {
            let account = &mut portfolio.accounts_mut()[idx];
            if account.is_settled() {
                continue;
            }

            if account.balance.is_positive() {
                // After preflight this only fails if an allocator raised a
                // balance with a negative credit.
                check_amortizes(account, month)?;

                let payment = account.payment;
                let interest = account.accrue_and_pay(payment);
                account.record(month, interest, payment);
                month_interest += interest;

                debug!(
                    "Month {}: '{}' charged {} paid {} balance {}",
                    month, account.identifier, interest, payment, account.balance
                );
            } else {
                account.settle();
                let surplus = account.surplus();
                let event = PayoffEvent {
                    account: account.identifier.clone(),
                    months_to_payoff: month,
                    payment: account.payment,
                    total_interest: account.cumulative_interest,
                };
                info!(
                    "'{}' paid off in {} months at {} a month with {} paid in interest",
                    event.account, event.months_to_payoff, event.payment, event.total_interest
                );
                payoffs.push(event);

                self.distribute(portfolio, surplus, month);
            }
        }

        Ok(month_interest)
    }

    /// Hands `surplus` to the accounts that are open right now.
    fn distribute(&self, portfolio: &mut Portfolio, surplus: Decimal4, month: u32) {
        let open = portfolio.open_indices();
        if open.is_empty() {
            debug!("Month {}: no open accounts, discarding surplus {}", month, surplus);
            return;
        }

        let credits = self.allocator.allocate(surplus, &open, portfolio.accounts());
        for (idx, amount) in credits {
            let Some(account) = portfolio.accounts_mut().get_mut(idx) else {
                continue;
            };
            if account.is_settled() {
                continue;
            }
            account.credit(amount);
            account.record(month, Decimal4::ZERO, amount);

            debug!(
                "Month {}: '{}' credited {} from surplus, balance {}",
                month, account.identifier, amount, account.balance
            );
        }
    }
}

/// Fails unless this month's payment exceeds the interest due on `account`.
fn check_amortizes(account: &AccountLedger, month: u32) -> Result<()> {
    let interest = account.interest_due();
    if interest >= account.payment {
        return Err(PayoffError::NonAmortizingPayment {
            account: account.identifier.clone(),
            month,
            interest,
            payment: account.payment,
        });
    }
    Ok(())
}
