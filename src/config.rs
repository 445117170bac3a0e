// ⚙️ Bank configuration
//
// Loaded once from the environment, falling back to defaults for anything
// unset. The demo binary layers CLI flags on top.
//
// Environment:
// - BANK_NAME           shared bank name (default "Banco Global")
// - BANK_AMOUNT_POLICY  "strict" | "permissive" (default "strict")

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Bank name every account reports until someone renames it
pub const DEFAULT_BANK_NAME: &str = "Banco Global";

pub const BANK_NAME_VAR: &str = "BANK_NAME";
pub const AMOUNT_POLICY_VAR: &str = "BANK_AMOUNT_POLICY";

// ============================================================================
// AMOUNT POLICY
// ============================================================================

/// How deposit/withdraw treat negative amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// Negative amounts are rejected with `AccountError::NegativeAmount`
    #[default]
    Strict,

    /// Negative amounts pass through: a negative deposit lowers the balance
    /// without the overdraft guard, a negative withdrawal always succeeds.
    Permissive,
}

impl AmountPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountPolicy::Strict => "strict",
            AmountPolicy::Permissive => "permissive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "strict" => Some(AmountPolicy::Strict),
            "permissive" => Some(AmountPolicy::Permissive),
            _ => None,
        }
    }
}

// ============================================================================
// BANK CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    pub bank_name: String,
    pub amount_policy: AmountPolicy,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            bank_name: DEFAULT_BANK_NAME.to_string(),
            amount_policy: AmountPolicy::default(),
        }
    }
}

impl BankConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (environment, map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BankConfig::default();

        if let Some(name) = lookup(BANK_NAME_VAR) {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: BANK_NAME_VAR.to_string(),
                    message: "bank name must not be empty".to_string(),
                });
            }
            config.bank_name = name.to_string();
        }

        if let Some(policy) = lookup(AMOUNT_POLICY_VAR) {
            config.amount_policy =
                AmountPolicy::parse(&policy).ok_or_else(|| ConfigError::InvalidValue {
                    key: AMOUNT_POLICY_VAR.to_string(),
                    message: format!("expected \"strict\" or \"permissive\", got {:?}", policy),
                })?;
        }

        Ok(config)
    }
}
