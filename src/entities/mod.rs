// Entity Models
//
// - Bank: shared context (name + amount policy) handed to every account
// - Account: stable identity (UUID), mutable balance, fixed overdraft limit

pub mod account;
pub mod bank;

pub use account::{Account, Party, Transfer, Withdrawal, HOLDER_OVERDRAFT_LIMIT, UNNAMED_HOLDER};
pub use bank::Bank;
