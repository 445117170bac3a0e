// 📄 Account reports - presentation layer
//
// The entities return structured outcomes; everything that turns them into
// text or JSON lives here.

use crate::entities::{Account, Transfer, Withdrawal};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Printed for a missing national id
const NO_NATIONAL_ID: &str = "(none)";

// ============================================================================
// ACCOUNT REPORT
// ============================================================================

/// Point-in-time snapshot of an account, including the bank name as it read
/// when the snapshot was taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountReport {
    pub id: Uuid,
    pub titleholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    pub balance: Decimal,
    pub overdraft_limit: Decimal,
    pub available: Decimal,
    pub bank_name: String,
    pub opened_at: DateTime<Utc>,
}

impl AccountReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Account> for AccountReport {
    fn from(account: &Account) -> Self {
        AccountReport {
            id: account.id(),
            titleholder: account.full_name(),
            national_id: account.national_id().map(str::to_string),
            balance: account.balance(),
            overdraft_limit: account.overdraft_limit(),
            available: account.available(),
            bank_name: account.bank_name(),
            opened_at: account.opened_at(),
        }
    }
}

impl fmt::Display for AccountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Titleholder: {}", self.titleholder)?;
        writeln!(
            f,
            "National ID: {}",
            self.national_id.as_deref().unwrap_or(NO_NATIONAL_ID)
        )?;
        writeln!(f, "Balance: {}", self.balance)?;
        writeln!(f, "Overdraft limit: {}", self.overdraft_limit)?;
        writeln!(f, "Bank: {}", self.bank_name)
    }
}

// ============================================================================
// OUTCOME LINES
// ============================================================================

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Withdrawal::Completed { amount, balance } => {
                write!(f, "Withdrawal of {} completed, balance now {}", amount, balance)
            }
            Withdrawal::Denied {
                amount,
                balance,
                overdraft_limit,
            } => write!(
                f,
                "Withdrawal of {} denied: balance {} cannot go below the overdraft limit {}",
                amount, balance, overdraft_limit
            ),
        }
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transfer::Completed {
                amount,
                source,
                destination,
            } => write!(
                f,
                "Transfer of {} from {} to {} completed",
                amount, source.name, destination.name
            ),
            Transfer::Denied { amount, source } => write!(
                f,
                "Transfer of {} failed: insufficient funds in {}",
                amount, source.name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Bank;
    use rust_decimal_macros::dec;

    #[test]
    fn test_report_text_layout() {
        let bank = Bank::new();
        let account = Account::for_holder(&bank, "Carlos", "López", "65432109C").unwrap();

        let text = account.report().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Titleholder: Carlos López",
                "National ID: 65432109C",
                "Balance: 0",
                "Overdraft limit: -50",
                "Bank: Banco Global",
            ]
        );
    }

    #[test]
    fn test_report_without_identity() {
        let bank = Bank::new();
        let account = Account::with_balance(&bank, dec!(200)).unwrap();

        let text = account.report().to_string();

        assert!(text.contains("Titleholder: (unnamed)"));
        assert!(text.contains("National ID: (none)"));
    }

    #[test]
    fn test_report_json() {
        let bank = Bank::with_name("Banco Internacional");
        let account = Account::with_balance(&bank, dec!(12.50)).unwrap();

        let json = account.report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["bank_name"], "Banco Internacional");
        assert_eq!(value["balance"], "12.50");
        assert_eq!(value["overdraft_limit"], "0");
        assert_eq!(value["id"], account.id().to_string());
        assert!(value.get("national_id").is_none());
    }

    #[test]
    fn test_snapshot_does_not_follow_later_changes() {
        let bank = Bank::new();
        let mut account = Account::with_balance(&bank, dec!(10)).unwrap();
        let before = account.report();

        account.deposit(dec!(5)).unwrap();
        bank.set_name("Renamed");

        assert_eq!(before.balance, dec!(10));
        assert_eq!(before.bank_name, "Banco Global");
        assert_eq!(account.report().bank_name, "Renamed");
    }

    #[test]
    fn test_outcome_lines() {
        let bank = Bank::new();
        let mut source = Account::for_holder(&bank, "Luis", "Martínez", "11111111D").unwrap();
        let mut destination = Account::for_holder(&bank, "Sofía", "Hernández", "22222222E").unwrap();

        let denied = source.withdraw(dec!(51)).unwrap();
        assert_eq!(
            denied.to_string(),
            "Withdrawal of 51 denied: balance 0 cannot go below the overdraft limit -50"
        );

        source.deposit(dec!(500)).unwrap();
        let transfer = source.transfer(&mut destination, dec!(200)).unwrap();
        assert_eq!(
            transfer.to_string(),
            "Transfer of 200 from Luis Martínez to Sofía Hernández completed"
        );

        let failed = destination.transfer(&mut source, dec!(300)).unwrap();
        assert_eq!(
            failed.to_string(),
            "Transfer of 300 failed: insufficient funds in Sofía Hernández"
        );
    }
}
