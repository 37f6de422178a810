//! Credit account ledger and its per-month reporting entries.
//!
//! Maintains the invariants that `monthly_rate` never changes after
//! construction, `cumulative_interest` never decreases, and `settled` only
//! ever flips from `false` to `true`.

use crate::decimal::Decimal4;
use crate::input::AccountInput;
use rust_decimal::Decimal;
use serde::Serialize;

/// One row of an account's payment history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentEntry {
    /// Month number, starting at 1.
    pub month: u32,

    /// Interest charged this month. Zero for redistribution credits.
    pub interest: Decimal4,

    /// Amount applied to the balance.
    pub payment: Decimal4,

    /// Balance after the entry, clamped to zero for reporting.
    pub balance: Decimal4,
}

/// State of a single revolving-credit account during a payoff run.
///
/// # Negative Balance
///
/// `balance` goes negative when a payment overshoots what was owed. The
/// overshoot is the surplus handed to the other accounts once this account
/// is flagged settled the following month. Reporting clamps it to zero; the
/// ledger itself never does.
#[derive(Debug, Clone)]
pub struct AccountLedger {
    /// Reporting label. Never used for computation.
    pub identifier: String,

    /// Principal currently owed.
    pub balance: Decimal4,

    /// Fixed amount paid every active month.
    pub payment: Decimal4,

    /// Total interest charged across all months.
    pub cumulative_interest: Decimal4,

    monthly_rate: Decimal,
    settled: bool,
    history: Vec<PaymentEntry>,
}

impl AccountLedger {
    /// Creates a ledger from validated input, deriving the monthly rate.
    pub fn new(input: AccountInput) -> Self {
        let monthly_rate = input.annual_rate / Decimal::ONE_HUNDRED / Decimal::from(12);
        AccountLedger {
            identifier: input.identifier,
            balance: input.balance,
            payment: input.payment,
            cumulative_interest: Decimal4::ZERO,
            monthly_rate,
            settled: false,
            history: Vec::new(),
        }
    }

    /// Monthly rate, the supplied annual percentage rate `/ 100 / 12`.
    pub fn monthly_rate(&self) -> Decimal {
        self.monthly_rate
    }

    /// Returns `true` once the account has been flagged paid off.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Per-month payment trace, in recording order.
    pub fn history(&self) -> &[PaymentEntry] {
        &self.history
    }

    /// Interest that would be charged on the current balance this month.
    pub fn interest_due(&self) -> Decimal4 {
        self.balance.apply_rate(self.monthly_rate)
    }

    /// Charges a month of interest and applies `payment`.
    ///
    /// Does not check that the payment covers the interest; the simulator
    /// does that before calling. Returns the interest charged.
    pub fn accrue_and_pay(&mut self, payment: Decimal4) -> Decimal4 {
        let interest = self.interest_due();
        self.balance -= payment;
        self.balance += interest;
        self.cumulative_interest += interest;
        interest
    }

    /// Applies a redistribution credit. No interest is charged.
    pub fn credit(&mut self, amount: Decimal4) {
        self.balance -= amount;
    }

    /// Flags the account paid off. There is no way back.
    pub fn settle(&mut self) {
        self.settled = true;
    }

    /// Amount overpaid, i.e. the negated balance once it has dropped to zero
    /// or below. Zero while the account still owes anything.
    pub fn surplus(&self) -> Decimal4 {
        (-self.balance).clamp_non_negative()
    }

    /// Appends a history entry for `month` using the current balance.
    pub fn record(&mut self, month: u32, interest: Decimal4, payment: Decimal4) {
        self.history.push(PaymentEntry {
            month,
            interest,
            payment,
            balance: self.balance.clamp_non_negative(),
        });
    }
}
