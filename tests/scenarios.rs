// End-to-end account scenarios through the public API

use checking_account::{Account, AccountError, AmountPolicy, Bank, BankConfig, Transfer};
use rust_decimal_macros::dec;

fn rendered(account: &Account) -> String {
    let mut out = Vec::new();
    account.display(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_construction_limits() {
    let bank = Bank::new();

    assert!(matches!(
        Account::new(&bank, dec!(0), dec!(1), None),
        Err(AccountError::PositiveOverdraftLimit { .. })
    ));
    assert!(Account::new(&bank, dec!(0), dec!(0), None).is_ok());

    let err = Account::new(&bank, dec!(-60), dec!(-50), None).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(Account::new(&bank, dec!(-50), dec!(-50), None).is_ok());
}

#[test]
fn test_overdraft_walkthrough() {
    let bank = Bank::new();
    let mut account = bank.open_for_holder("Ana", "García", "98765432B").unwrap();

    account.deposit(dec!(100)).unwrap();
    assert!(account.withdraw(dec!(120)).unwrap().is_completed());
    assert!(!account.withdraw(dec!(50)).unwrap().is_completed());

    assert_eq!(account.balance(), dec!(-20));
    assert!(rendered(&account).contains("Balance: -20"));
}

#[test]
fn test_transfer_success_and_failure() {
    let bank = Bank::new();
    let mut a = bank.open_for_holder("Luis", "Martínez", "11111111D").unwrap();
    let mut b = bank.open_for_holder("Sofía", "Hernández", "22222222E").unwrap();
    a.deposit(dec!(500)).unwrap();

    let outcome = a.transfer(&mut b, dec!(200)).unwrap();
    assert!(matches!(outcome, Transfer::Completed { .. }));
    assert_eq!((a.balance(), b.balance()), (dec!(300), dec!(200)));

    let mut poor = Account::new(&bank, dec!(10), dec!(0), None).unwrap();
    let outcome = poor.transfer(&mut b, dec!(50)).unwrap();
    assert!(matches!(outcome, Transfer::Denied { .. }));
    assert_eq!((poor.balance(), b.balance()), (dec!(10), dec!(200)));
}

#[test]
fn test_bank_rename_reaches_existing_and_new_accounts() {
    let bank = Bank::new();
    let funded = bank.open_with_balance(dec!(200)).unwrap();
    let holder = bank.open_for_holder("Carlos", "López", "65432109C").unwrap();
    assert!(rendered(&funded).contains("Bank: Banco Global"));

    bank.set_name("Banco Internacional");

    assert!(rendered(&funded).contains("Bank: Banco Internacional"));
    assert!(rendered(&holder).contains("Bank: Banco Internacional"));
    let later = bank.open_with_balance(dec!(1)).unwrap();
    assert!(rendered(&later).contains("Bank: Banco Internacional"));
}

#[test]
fn test_config_drives_bank() {
    let config = BankConfig::from_lookup(|key| match key {
        "BANK_NAME" => Some("Banco Sur".to_string()),
        "BANK_AMOUNT_POLICY" => Some("permissive".to_string()),
        _ => None,
    })
    .unwrap();
    let bank = Bank::from_config(&config);
    let mut account = bank.open_with_balance(dec!(0)).unwrap();

    assert_eq!(account.bank_name(), "Banco Sur");
    assert_eq!(bank.amount_policy(), AmountPolicy::Permissive);
    assert_eq!(account.deposit(dec!(-5)).unwrap(), dec!(-5));
}
