//! In-memory account registry.
//!
//! The registry is the sole owner of every [`Account`]. All access goes through
//! one mutex and each operation takes it exactly once, so a read-modify-write
//! of a balance never interleaves with another operation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;

use crate::amount::AmountInput;
use crate::{Account, AccountNumber, LedgerError, LedgerResult};

/// Upper bound on draws when looking for a free account number.
pub const MAX_NUMBER_ATTEMPTS: u32 = 1_000;

#[derive(Debug, Default)]
pub struct Registry {
    accounts: Mutex<HashMap<AccountNumber, Account>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new account with a fresh random number and a zero balance.
    pub fn create(&self, name: &str) -> LedgerResult<Account> {
        self.create_with_rng(name, &mut rand::thread_rng())
    }

    /// Same as [`Registry::create`] but drawing numbers from `rng`.
    pub fn create_with_rng<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> LedgerResult<Account> {
        if name.is_empty() {
            return Err(LedgerError::validation("Account holder name is required"));
        }

        let mut accounts = self.lock();
        let number = free_number(&accounts, rng)?;
        let account = Account::open(number.clone(), name);
        accounts.insert(number, account.clone());

        tracing::info!(account_number = %account.account_number(), name, "account created");
        Ok(account)
    }

    pub fn get(&self, number: &AccountNumber) -> LedgerResult<Account> {
        self.lock().get(number).cloned().ok_or(LedgerError::NotFound)
    }

    pub fn deposit(
        &self,
        number: &AccountNumber,
        amount: impl AmountInput,
    ) -> LedgerResult<Account> {
        let mut accounts = self.lock();
        let account = accounts.get_mut(number).ok_or(LedgerError::NotFound)?;
        let amount = amount
            .into_amount()
            .map_err(|_| LedgerError::validation("Invalid deposit amount"))?;

        account.credit(amount)?;

        tracing::info!(account_number = %number, %amount, "deposit applied");
        Ok(account.clone())
    }

    pub fn withdraw(
        &self,
        number: &AccountNumber,
        amount: impl AmountInput,
    ) -> LedgerResult<Account> {
        let mut accounts = self.lock();
        let account = accounts.get_mut(number).ok_or(LedgerError::NotFound)?;
        let amount = amount
            .into_amount()
            .map_err(|_| LedgerError::validation("Invalid withdrawal amount"))?;

        account.debit(amount)?;

        tracing::info!(account_number = %number, %amount, "withdrawal applied");
        Ok(account.clone())
    }

    /// Every live account, in no particular order.
    pub fn list_all(&self) -> Vec<Account> {
        self.lock().values().cloned().collect()
    }

    /// Set the balance to zero regardless of its current value.
    pub fn reset(&self, number: &AccountNumber) -> LedgerResult<Account> {
        let mut accounts = self.lock();
        let account = accounts.get_mut(number).ok_or(LedgerError::NotFound)?;
        account.reset();

        tracing::info!(account_number = %number, "balance reset");
        Ok(account.clone())
    }

    /// Remove the account permanently.
    pub fn delete(&self, number: &AccountNumber) -> LedgerResult<()> {
        self.lock().remove(number).ok_or(LedgerError::NotFound)?;

        tracing::info!(account_number = %number, "account deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // No operation panics while holding the lock, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<AccountNumber, Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn free_number<R: Rng + ?Sized>(
    accounts: &HashMap<AccountNumber, Account>,
    rng: &mut R,
) -> LedgerResult<AccountNumber> {
    for _ in 0..MAX_NUMBER_ATTEMPTS {
        let candidate = AccountNumber::random(rng);
        if !accounts.contains_key(&candidate) {
            return Ok(candidate);
        }
        tracing::debug!(account_number = %candidate, "account number collision, retrying");
    }
    Err(LedgerError::NumberSpaceExhausted(MAX_NUMBER_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn unknown() -> AccountNumber {
        AccountNumber::new("00000000")
    }

    #[test]
    fn create_opens_account_with_zero_balance() {
        let registry = Registry::new();
        let account = registry.create("Alice").unwrap();

        assert_eq!(account.name(), "Alice");
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(account.account_number().is_well_formed());
        assert_eq!(registry.get(account.account_number()).unwrap(), account);
    }

    #[test]
    fn create_rejects_empty_name() {
        let registry = Registry::new();
        let err = registry.create("").unwrap_err();

        assert_eq!(err, LedgerError::validation("Account holder name is required"));
        assert!(registry.is_empty());
    }

    #[test]
    fn create_retries_on_number_collision() {
        let registry = Registry::new();
        let first = registry
            .create_with_rng("Alice", &mut StdRng::seed_from_u64(7))
            .unwrap();

        // Same seed: the first draw collides with Alice's number.
        let second = registry
            .create_with_rng("Bob", &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_ne!(first.account_number(), second.account_number());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn create_gives_up_when_every_draw_collides() {
        let registry = Registry::new();
        registry.create_with_rng("Alice", &mut StepRng::new(0, 0)).unwrap();

        let err = registry
            .create_with_rng("Bob", &mut StepRng::new(0, 0))
            .unwrap_err();

        assert_eq!(err, LedgerError::NumberSpaceExhausted(MAX_NUMBER_ATTEMPTS));
        assert!(!err.is_client_error());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn alice_scenario() {
        let registry = Registry::new();
        let acc = registry.create("Alice").unwrap();
        let n = acc.account_number().clone();

        assert_eq!(registry.deposit(&n, 100.0).unwrap().balance(), Decimal::from(100));
        assert_eq!(registry.withdraw(&n, 40.0).unwrap().balance(), Decimal::from(60));

        let err = registry.withdraw(&n, 1000.0).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientFunds);
        assert_eq!(registry.get(&n).unwrap().balance(), Decimal::from(60));

        assert_eq!(registry.reset(&n).unwrap().balance(), Decimal::ZERO);

        registry.delete(&n).unwrap();
        assert_eq!(registry.get(&n).unwrap_err(), LedgerError::NotFound);
        assert_eq!(registry.delete(&n).unwrap_err(), LedgerError::NotFound);
    }

    #[test]
    fn invalid_amounts_do_not_mutate() {
        let registry = Registry::new();
        let n = registry.create("Alice").unwrap().account_number().clone();
        registry.deposit(&n, 50.0).unwrap();

        for bad in [0.0, -10.0, 1e-30, 1e29, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                registry.deposit(&n, bad).unwrap_err(),
                LedgerError::validation("Invalid deposit amount")
            );
            assert_eq!(
                registry.withdraw(&n, bad).unwrap_err(),
                LedgerError::validation("Invalid withdrawal amount")
            );
        }
        let text = serde_json::json!("10");
        assert!(matches!(registry.deposit(&n, &text), Err(LedgerError::Validation(_))));

        assert_eq!(registry.get(&n).unwrap().balance(), Decimal::from(50));
    }

    #[test]
    fn unknown_account_is_not_found_before_amount_is_checked() {
        let registry = Registry::new();
        registry.create("Alice").unwrap();
        let before = registry.list_all();

        assert_eq!(registry.get(&unknown()).unwrap_err(), LedgerError::NotFound);
        assert_eq!(registry.deposit(&unknown(), f64::NAN).unwrap_err(), LedgerError::NotFound);
        assert_eq!(registry.withdraw(&unknown(), -1.0).unwrap_err(), LedgerError::NotFound);
        assert_eq!(registry.reset(&unknown()).unwrap_err(), LedgerError::NotFound);
        assert_eq!(registry.delete(&unknown()).unwrap_err(), LedgerError::NotFound);

        assert_eq!(registry.list_all(), before);
    }

    #[test]
    fn list_all_returns_every_live_account() {
        let registry = Registry::new();
        let a = registry.create("Alice").unwrap();
        let b = registry.create("Bob").unwrap();
        let c = registry.create("Carol").unwrap();
        registry.delete(b.account_number()).unwrap();

        let listed: HashSet<AccountNumber> = registry
            .list_all()
            .into_iter()
            .map(|acc| acc.account_number().clone())
            .collect();

        assert_eq!(
            listed,
            HashSet::from([a.account_number().clone(), c.account_number().clone()])
        );
    }

    #[test]
    fn concurrent_deposits_are_not_lost() {
        let registry = Arc::new(Registry::new());
        let n = registry.create("Alice").unwrap().account_number().clone();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let n = n.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        registry.deposit(&n, 1_i64).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(registry.get(&n).unwrap().balance(), Decimal::from(2_000));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: n deposits of `a` increase the balance by exactly n*a.
        #[test]
        fn repeated_deposits_sum_exactly(cents in 1i64..10_000_000i64, n in 1usize..20) {
            let registry = Registry::new();
            let number = registry.create("Prop").unwrap().account_number().clone();
            let a = Decimal::new(cents, 2);

            for _ in 0..n {
                registry.deposit(&number, a).unwrap();
            }

            prop_assert_eq!(registry.get(&number).unwrap().balance(), a * Decimal::from(n));
        }

        /// Property: a withdrawal either subtracts exactly or fails and changes nothing.
        #[test]
        fn withdraw_subtracts_exactly_or_fails_cleanly(
            deposit in 1i64..1_000_000i64,
            withdraw in 1i64..2_000_000i64,
        ) {
            let registry = Registry::new();
            let number = registry.create("Prop").unwrap().account_number().clone();
            registry.deposit(&number, deposit).unwrap();

            let result = registry.withdraw(&number, withdraw);
            let balance = registry.get(&number).unwrap().balance();

            if withdraw <= deposit {
                prop_assert_eq!(result.unwrap().balance(), Decimal::from(deposit - withdraw));
                prop_assert_eq!(balance, Decimal::from(deposit - withdraw));
            } else {
                prop_assert_eq!(result.unwrap_err(), LedgerError::InsufficientFunds);
                prop_assert_eq!(balance, Decimal::from(deposit));
            }
        }
    }
}
