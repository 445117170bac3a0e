// ⚠️ Errors - account construction and amount checks
//
// Insufficient funds is NOT an error: withdrawals and transfers report it as
// a denied outcome. Only invalid arguments end up here.

use rust_decimal::Decimal;
use thiserror::Error;

// ============================================================================
// ACCOUNT ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Overdraft limit above zero at construction
    #[error("invalid argument: overdraft limit must be zero or negative, got {limit}")]
    PositiveOverdraftLimit { limit: Decimal },

    /// Opening balance already past the overdraft limit
    #[error("invalid argument: initial balance {balance} is below the overdraft limit {limit}")]
    BalanceBelowOverdraftLimit { balance: Decimal, limit: Decimal },

    /// Negative deposit/withdraw amount under the strict amount policy
    #[error("invalid argument: amount must not be negative, got {amount}")]
    NegativeAmount { amount: Decimal },

    /// Crediting the amount would leave the decimal range
    #[error("invalid argument: amount {amount} cannot be added to balance {balance}")]
    AmountOutOfRange { amount: Decimal, balance: Decimal },
}

impl AccountError {
    /// Every variant is a rejected argument; kept as a predicate so callers
    /// can branch on the category without listing variants.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            AccountError::PositiveOverdraftLimit { .. }
                | AccountError::BalanceBelowOverdraftLimit { .. }
                | AccountError::NegativeAmount { .. }
                | AccountError::AmountOutOfRange { .. }
        )
    }
}

// ============================================================================
// CONFIG ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_messages_name_the_values() {
        let err = AccountError::BalanceBelowOverdraftLimit {
            balance: dec!(-60),
            limit: dec!(-50),
        };
        let message = err.to_string();
        assert!(message.contains("-60"));
        assert!(message.contains("-50"));
        assert!(message.starts_with("invalid argument"));
    }

    #[test]
    fn test_all_account_errors_are_invalid_arguments() {
        assert!(AccountError::PositiveOverdraftLimit { limit: dec!(1) }.is_invalid_argument());
        assert!(AccountError::NegativeAmount { amount: dec!(-5) }.is_invalid_argument());
    }
}
