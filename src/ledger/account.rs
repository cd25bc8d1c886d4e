//! Account ledger with guarded mutation

use rust_decimal::Decimal;

use crate::common::errors::{EngineError, Result};
use crate::common::types::{
    AccountId, AccountSnapshot, Money, TransactionKind, TransactionNotice, TransactionRecord,
};

/// Mutable account state
///
/// The balance is never negative. Both mutations are guarded: a failed
/// deposit or withdrawal returns an error and leaves the balance and
/// history exactly as they were. Reporting components receive
/// [`AccountSnapshot`]s, never the ledger itself.
#[derive(Debug)]
pub struct Ledger {
    account_id: AccountId,
    balance: Money,
    history: Vec<TransactionRecord>,
}

impl Ledger {
    /// Open a ledger with an opening balance
    ///
    /// A negative opening balance is rejected: the non-negative invariant
    /// holds from construction, not only after the first mutation.
    pub fn open(account_id: impl Into<AccountId>, opening_balance: Money) -> Result<Self> {
        if opening_balance < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                amount: opening_balance,
            });
        }
        Ok(Self {
            account_id: account_id.into(),
            balance: opening_balance,
            history: Vec::new(),
        })
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Applied transactions, oldest first
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// Read-only view for reporting
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_id: self.account_id.clone(),
            balance: self.balance,
            taken_at: chrono::Utc::now(),
        }
    }

    /// Credit `amount` to the balance
    ///
    /// Requires `amount > 0`, otherwise [`EngineError::InvalidAmount`].
    pub fn deposit(&mut self, amount: Money) -> Result<TransactionNotice> {
        Self::require_positive(amount)?;
        self.balance += amount;
        Ok(self.record(TransactionKind::Deposit, amount))
    }

    /// Debit `amount` from the balance
    ///
    /// Requires `amount > 0` ([`EngineError::InvalidAmount`]) and
    /// `amount <= balance` ([`EngineError::InsufficientFunds`]). Both
    /// failures are recoverable; the caller decides whether to retry.
    pub fn withdraw(&mut self, amount: Money) -> Result<TransactionNotice> {
        Self::require_positive(amount)?;
        if amount > self.balance {
            return Err(EngineError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.record(TransactionKind::Withdrawal, amount))
    }

    fn require_positive(amount: Money) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount { amount });
        }
        Ok(())
    }

    fn record(&mut self, kind: TransactionKind, amount: Money) -> TransactionNotice {
        self.history.push(TransactionRecord {
            kind,
            amount,
            balance_after: self.balance,
            at: chrono::Utc::now(),
        });
        TransactionNotice {
            account_id: self.account_id.clone(),
            kind,
            amount,
            balance_after: self.balance,
        }
    }
}
