//! Account - a single user's cash, share holdings and audit trail
//!
//! Every mutating operation follows the same shape: validate every input and
//! precondition first, then apply all state changes, then append exactly one
//! ledger entry. A rejected operation returns before the first write, so a
//! failed call never leaves a partial change behind.

use crate::domain::entities::ledger_entry::{LedgerAction, LedgerEntry};
use crate::domain::errors::LedgerError;
use crate::domain::repositories::PriceOracle;
use crate::domain::value_objects::{Amount, PnL, Quantity};
use std::collections::BTreeMap;
use std::sync::Arc;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Trading account for one user
pub struct Account {
    owner_id: String,
    cash_balance: f64,
    /// Invariant: every entry holds a quantity > 0
    holdings: BTreeMap<String, u64>,
    transactions: Vec<LedgerEntry>,
    /// Profit/loss baseline. Later deposits do not move it.
    initial_deposit: f64,
    oracle: Arc<dyn PriceOracle>,
}

impl Account {
    /// Open an account funded with `initial_deposit`
    ///
    /// # Errors
    /// `InvalidInitialDeposit` if `initial_deposit` is negative or not
    /// finite. Zero is allowed.
    pub fn open(
        owner_id: impl Into<String>,
        initial_deposit: f64,
        oracle: Arc<dyn PriceOracle>,
    ) -> LedgerResult<Self> {
        if !initial_deposit.is_finite() || initial_deposit < 0.0 {
            return Err(LedgerError::InvalidInitialDeposit {
                amount: initial_deposit,
            });
        }

        let owner_id = owner_id.into();
        tracing::info!(
            "Account opened: owner={}, initial_deposit={}",
            owner_id,
            initial_deposit
        );

        Ok(Self {
            owner_id,
            cash_balance: initial_deposit,
            holdings: BTreeMap::new(),
            transactions: Vec::new(),
            initial_deposit,
            oracle,
        })
    }

    /// Add cash to the account
    pub fn deposit(&mut self, amount: f64) -> LedgerResult<()> {
        let amount = Self::validate_amount(amount)?;
        let new_balance = self.credited_balance(amount.value())?;

        self.cash_balance = new_balance;
        self.record(LedgerAction::deposit(amount));

        tracing::info!(
            "Deposit committed: owner={}, amount={}, balance={}",
            self.owner_id,
            amount,
            self.cash_balance
        );
        Ok(())
    }

    /// Take cash out of the account
    pub fn withdraw(&mut self, amount: f64) -> LedgerResult<()> {
        let amount = Self::validate_amount(amount)?;

        if amount.value() > self.cash_balance {
            tracing::warn!(
                "Withdrawal rejected: owner={}, amount={}, balance={}",
                self.owner_id,
                amount,
                self.cash_balance
            );
            return Err(LedgerError::InsufficientFunds {
                required: amount.value(),
                available: self.cash_balance,
            });
        }

        self.cash_balance -= amount.value();
        self.record(LedgerAction::withdrawal(amount));

        tracing::info!(
            "Withdrawal committed: owner={}, amount={}, balance={}",
            self.owner_id,
            amount,
            self.cash_balance
        );
        Ok(())
    }

    /// Buy `quantity` shares of `symbol` at the current quoted price
    ///
    /// # Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `PriceUnavailable` if the oracle cannot quote `symbol`
    /// - `InsufficientFunds` if the cost exceeds the cash balance
    /// - `HoldingOverflow` if the new share count does not fit in a `u64`
    pub fn buy_shares(&mut self, symbol: &str, quantity: i64) -> LedgerResult<()> {
        let quantity = Self::validate_quantity(quantity)?;
        let price = self.oracle.price_of(symbol)?;
        let cost = price.notional(quantity.value());

        if cost > self.cash_balance {
            tracing::warn!(
                "Purchase rejected: owner={}, symbol={}, cost={}, balance={}",
                self.owner_id,
                symbol,
                cost,
                self.cash_balance
            );
            return Err(LedgerError::InsufficientFunds {
                required: cost,
                available: self.cash_balance,
            });
        }

        let held = self.holdings.get(symbol).copied().unwrap_or(0);
        let Some(new_held) = held.checked_add(quantity.value()) else {
            tracing::warn!(
                "Purchase rejected: owner={}, symbol={}, held={}, requested={} overflows",
                self.owner_id,
                symbol,
                held,
                quantity
            );
            return Err(LedgerError::HoldingOverflow {
                symbol: symbol.to_string(),
                requested: quantity.value(),
                held,
            });
        };

        self.cash_balance -= cost;
        self.holdings.insert(symbol.to_string(), new_held);
        self.record(LedgerAction::purchase(symbol, quantity, price));

        tracing::info!(
            "Purchase committed: owner={}, symbol={}, quantity={}, price={}, balance={}",
            self.owner_id,
            symbol,
            quantity,
            price,
            self.cash_balance
        );
        Ok(())
    }

    /// Sell `quantity` shares of `symbol` at the current quoted price
    ///
    /// Holdings are checked before the oracle is consulted, so selling a
    /// symbol the account does not hold never triggers a price lookup.
    ///
    /// # Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `InsufficientShares` if `quantity` exceeds the held amount
    /// - `PriceUnavailable` if the oracle cannot quote `symbol`
    /// - `BalanceOverflow` if the proceeds push the balance past `f64::MAX`
    pub fn sell_shares(&mut self, symbol: &str, quantity: i64) -> LedgerResult<()> {
        let quantity = Self::validate_quantity(quantity)?;
        let held = self.holdings.get(symbol).copied().unwrap_or(0);

        if quantity.value() > held {
            tracing::warn!(
                "Sale rejected: owner={}, symbol={}, requested={}, held={}",
                self.owner_id,
                symbol,
                quantity,
                held
            );
            return Err(LedgerError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: quantity.value(),
                held,
            });
        }

        let price = self.oracle.price_of(symbol)?;
        let proceeds = price.notional(quantity.value());
        let new_balance = self.credited_balance(proceeds)?;

        self.cash_balance = new_balance;
        let remaining = held - quantity.value();
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), remaining);
        }
        self.record(LedgerAction::sale(symbol, quantity, price));

        tracing::info!(
            "Sale committed: owner={}, symbol={}, quantity={}, price={}, balance={}",
            self.owner_id,
            symbol,
            quantity,
            price,
            self.cash_balance
        );
        Ok(())
    }

    /// Snapshot of symbol -> shares held
    pub fn get_holdings(&self) -> BTreeMap<String, u64> {
        self.holdings.clone()
    }

    /// Cash plus every holding marked at its current quote
    pub fn get_portfolio_value(&self) -> LedgerResult<f64> {
        let mut value = self.cash_balance;
        for (symbol, quantity) in &self.holdings {
            let price = self.oracle.price_of(symbol)?;
            value += price.notional(*quantity);
        }
        Ok(value)
    }

    /// Portfolio value minus the creation-time deposit
    pub fn get_profit_or_loss(&self) -> LedgerResult<PnL> {
        let value = self.get_portfolio_value()?;
        Ok(PnL::between(value, self.initial_deposit))
    }

    /// Snapshot of the record lines, oldest first
    pub fn get_transactions(&self) -> Vec<String> {
        self.transactions.iter().map(LedgerEntry::description).collect()
    }

    /// Snapshot of the structured entries, oldest first
    pub fn ledger_entries(&self) -> Vec<LedgerEntry> {
        self.transactions.clone()
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    pub fn initial_deposit(&self) -> f64 {
        self.initial_deposit
    }

    /// Check the account invariants, returning the first one violated
    pub fn validate_invariants(&self) -> Result<(), String> {
        if !self.cash_balance.is_finite() {
            return Err(format!("cash_balance {} is not finite", self.cash_balance));
        }

        if self.cash_balance < 0.0 {
            return Err(format!("cash_balance {} < 0", self.cash_balance));
        }

        if let Some((symbol, _)) = self.holdings.iter().find(|(_, qty)| **qty == 0) {
            return Err(format!("holding for {} has zero quantity", symbol));
        }

        Ok(())
    }

    // ========== Private Helper Methods ==========

    fn validate_amount(amount: f64) -> LedgerResult<Amount> {
        Amount::new(amount).map_err(|_| LedgerError::InvalidAmount { amount })
    }

    fn validate_quantity(quantity: i64) -> LedgerResult<Quantity> {
        Quantity::new(quantity).map_err(|_| LedgerError::InvalidQuantity { quantity })
    }

    fn credited_balance(&self, credit: f64) -> LedgerResult<f64> {
        let new_balance = self.cash_balance + credit;
        if !new_balance.is_finite() {
            tracing::warn!(
                "Credit rejected: owner={}, credit={}, balance={} overflows",
                self.owner_id,
                credit,
                self.cash_balance
            );
            return Err(LedgerError::BalanceOverflow {
                balance: self.cash_balance,
                credit,
            });
        }
        Ok(new_balance)
    }

    fn record(&mut self, action: LedgerAction) {
        self.transactions.push(LedgerEntry::new(action));
        debug_assert!(self.validate_invariants().is_ok());
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("owner_id", &self.owner_id)
            .field("cash_balance", &self.cash_balance)
            .field("holdings", &self.holdings)
            .field("transactions", &self.transactions.len())
            .field("initial_deposit", &self.initial_deposit)
            .finish_non_exhaustive()
    }
}
