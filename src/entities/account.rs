// 💳 Account Entity - checking account with an overdraft limit
//
// "The balance is a VALUE (changes), the account id is IDENTITY (never changes)"
//
// Rules:
// - overdraft_limit <= 0, fixed at construction
// - balance >= overdraft_limit at construction and before every withdrawal
// - insufficient funds is an outcome (Withdrawal::Denied), not an error

use super::bank::Bank;
use crate::config::AmountPolicy;
use crate::error::AccountError;
use crate::report::AccountReport;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io;
use uuid::Uuid;

/// Overdraft limit given to accounts opened for a titleholder
pub const HOLDER_OVERDRAFT_LIMIT: Decimal = dec!(-50);

/// Rendered by `full_name()` when no name part was ever set
pub const UNNAMED_HOLDER: &str = "(unnamed)";

// ============================================================================
// OUTCOMES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Withdrawal {
    /// Money left the account; `balance` is the new balance
    Completed { amount: Decimal, balance: Decimal },

    /// Would have crossed the overdraft limit; balance untouched
    Denied {
        amount: Decimal,
        balance: Decimal,
        overdraft_limit: Decimal,
    },
}

impl Withdrawal {
    pub fn is_completed(&self) -> bool {
        matches!(self, Withdrawal::Completed { .. })
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Withdrawal::Completed { amount, .. } | Withdrawal::Denied { amount, .. } => *amount,
        }
    }

    /// Balance after the attempt
    pub fn balance(&self) -> Decimal {
        match self {
            Withdrawal::Completed { balance, .. } | Withdrawal::Denied { balance, .. } => *balance,
        }
    }
}

/// One side of a transfer, captured after the attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub id: Uuid,
    pub name: String,
    pub balance: Decimal,
}

impl Party {
    fn of(account: &Account) -> Self {
        Party {
            id: account.id,
            name: account.full_name(),
            balance: account.balance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Completed {
        amount: Decimal,
        source: Party,
        destination: Party,
    },
    /// Source could not cover the amount; neither balance changed
    Denied { amount: Decimal, source: Party },
}

impl Transfer {
    pub fn is_completed(&self) -> bool {
        matches!(self, Transfer::Completed { .. })
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Transfer::Completed { amount, .. } | Transfer::Denied { amount, .. } => *amount,
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Checking account
///
/// Identity: UUID (never changes)
/// Values: balance (mutable), titleholder fields (set once)
/// Relationship: bank handle, shared with every other account of that bank
///
/// Not `Clone`: two copies would share an id but diverge in balance.
#[derive(Debug)]
pub struct Account {
    id: Uuid,
    balance: Decimal,
    overdraft_limit: Decimal,
    first_name: Option<String>,
    last_name: Option<String>,
    national_id: Option<String>,
    opened_at: DateTime<Utc>,
    bank: Bank,
}

impl Account {
    /// Full form. Every other constructor funnels through here.
    ///
    /// Fails when the overdraft limit is positive or the opening balance is
    /// already below it. The boundary is inclusive: balance == limit is fine.
    pub fn new(
        bank: &Bank,
        balance: Decimal,
        overdraft_limit: Decimal,
        national_id: Option<String>,
    ) -> Result<Self, AccountError> {
        if overdraft_limit > Decimal::ZERO {
            return Err(AccountError::PositiveOverdraftLimit {
                limit: overdraft_limit,
            });
        }
        if balance < overdraft_limit {
            return Err(AccountError::BalanceBelowOverdraftLimit {
                balance,
                limit: overdraft_limit,
            });
        }

        let account = Account {
            id: Uuid::new_v4(),
            balance,
            overdraft_limit,
            first_name: None,
            last_name: None,
            national_id,
            opened_at: Utc::now(),
            bank: bank.clone(),
        };

        tracing::debug!(
            account_id = %account.id,
            %balance,
            %overdraft_limit,
            "account opened"
        );

        Ok(account)
    }

    /// Titleholder form: balance 0, overdraft limit -50
    pub fn for_holder(
        bank: &Bank,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Result<Self, AccountError> {
        let mut account = Self::new(
            bank,
            Decimal::ZERO,
            HOLDER_OVERDRAFT_LIMIT,
            Some(national_id.into()),
        )?;
        account.first_name = Some(first_name.into());
        account.last_name = Some(last_name.into());
        Ok(account)
    }

    /// Balance-only form: overdraft limit 0, no titleholder
    pub fn with_balance(bank: &Bank, balance: Decimal) -> Result<Self, AccountError> {
        Self::new(bank, balance, Decimal::ZERO, None)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Shared bank name, read at call time
    pub fn bank_name(&self) -> String {
        self.bank.name()
    }

    /// How much can still be withdrawn before hitting the overdraft limit
    pub fn available(&self) -> Decimal {
        self.balance.saturating_sub(self.overdraft_limit)
    }

    /// Check if account is overdrawn (negative balance)
    pub fn is_overdrawn(&self) -> bool {
        self.balance < Decimal::ZERO
    }

    /// First and last name joined by one space; absent parts are skipped.
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => UNNAMED_HOLDER.to_string(),
        }
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    fn check_amount(&self, amount: Decimal) -> Result<(), AccountError> {
        match self.bank.amount_policy() {
            AmountPolicy::Strict if amount < Decimal::ZERO => {
                Err(AccountError::NegativeAmount { amount })
            }
            _ => Ok(()),
        }
    }

    /// Balance after crediting `amount`, without applying it
    fn credited(&self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.check_amount(amount)?;
        self.balance
            .checked_add(amount)
            .ok_or(AccountError::AmountOutOfRange {
                amount,
                balance: self.balance,
            })
    }

    /// Add `amount` to the balance, returning the new balance.
    ///
    /// Not guarded by the overdraft limit; only the amount policy applies.
    /// A sum outside the decimal range fails and leaves the balance as is.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.balance = self.credited(amount)?;
        Ok(self.balance)
    }

    /// Withdraw `amount` if the balance stays at or above the overdraft limit.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Withdrawal, AccountError> {
        self.check_amount(amount)?;

        // A result outside the decimal range counts as crossing the limit
        if let Some(balance) = self.balance.checked_sub(amount) {
            if balance >= self.overdraft_limit {
                self.balance = balance;
                return Ok(Withdrawal::Completed { amount, balance });
            }
        }

        tracing::warn!(
            account_id = %self.id,
            %amount,
            balance = %self.balance,
            overdraft_limit = %self.overdraft_limit,
            "withdrawal denied: overdraft limit would be exceeded"
        );

        Ok(Withdrawal::Denied {
            amount,
            balance: self.balance,
            overdraft_limit: self.overdraft_limit,
        })
    }

    /// Move `amount` to `destination`: withdraw here, deposit there.
    ///
    /// The amount is checked against both accounts' policies, and the
    /// destination's credit is computed, before anything moves, so a completed
    /// withdrawal is always followed by the deposit.
    ///
    /// `destination` cannot be `self`; the borrow checker rejects it:
    ///
    /// ```compile_fail
    /// use checking_account::Bank;
    /// use rust_decimal_macros::dec;
    ///
    /// let bank = Bank::new();
    /// let mut account = bank.open_with_balance(dec!(100)).unwrap();
    /// account.transfer(&mut account, dec!(10)).unwrap();
    /// ```
    pub fn transfer(
        &mut self,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<Transfer, AccountError> {
        self.check_amount(amount)?;
        destination.credited(amount)?;

        if !self.withdraw(amount)?.is_completed() {
            tracing::warn!(
                source = %self.id,
                destination = %destination.id,
                %amount,
                "transfer failed: insufficient funds"
            );
            return Ok(Transfer::Denied {
                amount,
                source: Party::of(self),
            });
        }

        destination.deposit(amount)?;

        tracing::info!(
            source = %self.id,
            destination = %destination.id,
            %amount,
            cross_bank = !self.bank.same_bank(&destination.bank),
            "transfer completed"
        );

        Ok(Transfer::Completed {
            amount,
            source: Party::of(self),
            destination: Party::of(destination),
        })
    }

    /// Snapshot for rendering
    pub fn report(&self) -> AccountReport {
        AccountReport::from(self)
    }

    /// Write the multi-line account report to `out`. Never mutates.
    pub fn display<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.report())
    }
}

// ============================================================================
// TESTS
// ============================================================================
