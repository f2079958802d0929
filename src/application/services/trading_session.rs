//! TradingSession - explicit handle to the one account a front end drives
//!
//! The session owns the price source and at most one account. A front end
//! holds the session and passes every request through it; nothing about the
//! account lives in process-wide state.

use crate::domain::entities::{Account, LedgerEntry};
use crate::domain::errors::LedgerError;
use crate::domain::repositories::PriceOracle;
use crate::domain::value_objects::PnL;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("No account exists yet. Create one first.")]
    NoAccount,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Session that manages a single trading account
pub struct TradingSession {
    oracle: Arc<dyn PriceOracle>,
    account: Option<Account>,
}

impl TradingSession {
    pub fn new(oracle: Arc<dyn PriceOracle>) -> Self {
        Self {
            oracle,
            account: None,
        }
    }

    /// Open a new account, replacing any account this session already had
    pub fn create_account(
        &mut self,
        username: &str,
        initial_deposit: f64,
    ) -> SessionResult<&Account> {
        let account = Account::open(username, initial_deposit, Arc::clone(&self.oracle))?;

        if let Some(previous) = self.account.replace(account) {
            info!(
                "Replaced account for {} ({} transactions discarded)",
                previous.owner_id(),
                previous.get_transactions().len()
            );
        }

        self.account()
    }

    pub fn has_account(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> SessionResult<&Account> {
        self.account.as_ref().ok_or(SessionError::NoAccount)
    }

    pub fn account_mut(&mut self) -> SessionResult<&mut Account> {
        self.account.as_mut().ok_or(SessionError::NoAccount)
    }

    /// Deposit and return the resulting cash balance
    pub fn deposit(&mut self, amount: f64) -> SessionResult<f64> {
        let account = self.account_mut()?;
        account.deposit(amount)?;
        Ok(account.cash_balance())
    }

    /// Withdraw and return the resulting cash balance
    pub fn withdraw(&mut self, amount: f64) -> SessionResult<f64> {
        let account = self.account_mut()?;
        account.withdraw(amount)?;
        Ok(account.cash_balance())
    }

    /// Buy and return the remaining cash balance
    pub fn buy_shares(&mut self, symbol: &str, quantity: i64) -> SessionResult<f64> {
        let account = self.account_mut()?;
        account.buy_shares(symbol, quantity)?;
        Ok(account.cash_balance())
    }

    /// Sell and return the resulting cash balance
    pub fn sell_shares(&mut self, symbol: &str, quantity: i64) -> SessionResult<f64> {
        let account = self.account_mut()?;
        account.sell_shares(symbol, quantity)?;
        Ok(account.cash_balance())
    }

    pub fn holdings(&self) -> SessionResult<BTreeMap<String, u64>> {
        Ok(self.account()?.get_holdings())
    }

    pub fn portfolio_value(&self) -> SessionResult<f64> {
        Ok(self.account()?.get_portfolio_value()?)
    }

    pub fn profit_or_loss(&self) -> SessionResult<PnL> {
        Ok(self.account()?.get_profit_or_loss()?)
    }

    pub fn transactions(&self) -> SessionResult<Vec<String>> {
        Ok(self.account()?.get_transactions())
    }

    pub fn ledger_entries(&self) -> SessionResult<Vec<LedgerEntry>> {
        Ok(self.account()?.ledger_entries())
    }
}
