use rust_decimal::Decimal;
use serde::Serialize;

use crate::{Amount, AccountNumber, LedgerError, LedgerResult};

/// A named balance record.
///
/// `account_number` and `name` never change after creation; `balance` is only
/// touched through [`Account::credit`], [`Account::debit`] and
/// [`Account::reset`], which keep it non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    account_number: AccountNumber,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    balance: Decimal,
}

impl Account {
    /// New account with a zero balance.
    pub fn open(account_number: AccountNumber, name: impl Into<String>) -> Self {
        Self {
            account_number,
            name: name.into(),
            balance: Decimal::ZERO,
        }
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub(crate) fn credit(&mut self, amount: Amount) -> LedgerResult<()> {
        self.balance = self
            .balance
            .checked_add(amount.value())
            .ok_or_else(|| LedgerError::validation("Deposit would overflow the balance"))?;
        Ok(())
    }

    pub(crate) fn debit(&mut self, amount: Amount) -> LedgerResult<()> {
        if amount.value() > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount.value();
        Ok(())
    }

    pub(crate) fn reset(&mut self) {
        self.balance = Decimal::ZERO;
    }
}
