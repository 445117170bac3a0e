// 🏦 Bank Context - the one place the shared bank name lives
//
// Every account is opened against a Bank handle and keeps a clone of it.
// Clones share the same name cell, so renaming through any handle is seen by
// every existing account and every account opened afterwards.

use super::account::Account;
use crate::config::{AmountPolicy, BankConfig, DEFAULT_BANK_NAME};
use crate::error::AccountError;
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock};

// ============================================================================
// BANK
// ============================================================================

#[derive(Debug, Clone)]
pub struct Bank {
    /// Shared name cell (all clones point at the same one)
    name: Arc<RwLock<String>>,

    /// Fixed for the lifetime of the bank
    amount_policy: AmountPolicy,
}

impl Bank {
    /// Bank with the default name and strict amount policy
    pub fn new() -> Self {
        Self::with_name(DEFAULT_BANK_NAME)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Bank {
            name: Arc::new(RwLock::new(name.into())),
            amount_policy: AmountPolicy::default(),
        }
    }

    pub fn from_config(config: &BankConfig) -> Self {
        Bank {
            name: Arc::new(RwLock::new(config.bank_name.clone())),
            amount_policy: config.amount_policy,
        }
    }

    /// Same bank, different amount policy (shares the name cell)
    pub fn with_amount_policy(mut self, amount_policy: AmountPolicy) -> Self {
        self.amount_policy = amount_policy;
        self
    }

    /// Current shared name
    pub fn name(&self) -> String {
        // A poisoned lock still holds a whole String; keep serving it.
        self.name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rename the bank for every account holding this handle
    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        let mut current = self.name.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(from = current.as_str(), to = name.as_str(), "bank renamed");
        *current = name;
    }

    pub fn amount_policy(&self) -> AmountPolicy {
        self.amount_policy
    }

    /// True when both handles share one name cell
    pub fn same_bank(&self, other: &Bank) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }

    // ------------------------------------------------------------------------
    // Opening accounts
    // ------------------------------------------------------------------------

    /// Full form, see [`Account::new`]
    pub fn open_account(
        &self,
        balance: Decimal,
        overdraft_limit: Decimal,
        national_id: Option<String>,
    ) -> Result<Account, AccountError> {
        Account::new(self, balance, overdraft_limit, national_id)
    }

    /// Titleholder form: balance 0, overdraft limit -50
    pub fn open_for_holder(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Result<Account, AccountError> {
        Account::for_holder(self, first_name, last_name, national_id)
    }

    /// Balance-only form: overdraft limit 0, no titleholder
    pub fn open_with_balance(&self, balance: Decimal) -> Result<Account, AccountError> {
        Account::with_balance(self, balance)
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
