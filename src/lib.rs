// Checking Account - Core Library
// Exposes the account model for the demo binary and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use config::{AmountPolicy, BankConfig, DEFAULT_BANK_NAME};
pub use entities::{
    Account, Bank, Party, Transfer, Withdrawal,
    HOLDER_OVERDRAFT_LIMIT, UNNAMED_HOLDER,
};
pub use error::{AccountError, ConfigError};
pub use report::AccountReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
