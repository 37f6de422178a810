//! Surplus redistribution strategies.
//!
//! When an account settles, whatever it overpaid is handed to the accounts
//! that are still open. Only this step decides who gets how much; the rest
//! of the monthly cycle is unaware of the strategy in use.

use crate::account::AccountLedger;
use crate::decimal::Decimal4;

/// Decides how a settled account's surplus is shared among open accounts.
pub trait SurplusAllocator {
    /// Returns `(portfolio index, credit)` pairs for the accounts listed in
    /// `open`. `open` is in portfolio order and never contains a settled
    /// account. An empty result discards the surplus.
    fn allocate(
        &self,
        surplus: Decimal4,
        open: &[usize],
        accounts: &[AccountLedger],
    ) -> Vec<(usize, Decimal4)>;
}

/// Splits the surplus equally, ignoring rate and balance.
///
/// Shares are truncated to 4 places; the sub-cent leftover goes to the last
/// open account in portfolio order, so the credits always sum to the surplus.
/// Zero credits are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualSplit;

impl SurplusAllocator for EqualSplit {
    fn allocate(
        &self,
        surplus: Decimal4,
        open: &[usize],
        _accounts: &[AccountLedger],
    ) -> Vec<(usize, Decimal4)> {
        if surplus.is_zero() {
            return Vec::new();
        }
        let Some((share, leftover)) = surplus.split(open.len()) else {
            return Vec::new();
        };
        let last = open.len() - 1;
        open.iter()
            .enumerate()
            .map(|(pos, &idx)| {
                if pos == last {
                    (idx, share + leftover)
                } else {
                    (idx, share)
                }
            })
            .filter(|(_, credit)| !credit.is_zero())
            .collect()
    }
}
