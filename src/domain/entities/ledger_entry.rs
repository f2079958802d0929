//! Ledger entries - the account's audit trail

use crate::domain::value_objects::{Amount, Price, Quantity};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What a committed operation did to the account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerAction {
    Deposit {
        amount: f64,
    },
    Withdrawal {
        amount: f64,
    },
    Purchase {
        symbol: String,
        quantity: u64,
        price: f64,
    },
    Sale {
        symbol: String,
        quantity: u64,
        price: f64,
    },
}

impl LedgerAction {
    pub fn deposit(amount: Amount) -> Self {
        LedgerAction::Deposit {
            amount: amount.value(),
        }
    }

    pub fn withdrawal(amount: Amount) -> Self {
        LedgerAction::Withdrawal {
            amount: amount.value(),
        }
    }

    pub fn purchase(symbol: &str, quantity: Quantity, price: Price) -> Self {
        LedgerAction::Purchase {
            symbol: symbol.to_string(),
            quantity: quantity.value(),
            price: price.value(),
        }
    }

    pub fn sale(symbol: &str, quantity: Quantity, price: Price) -> Self {
        LedgerAction::Sale {
            symbol: symbol.to_string(),
            quantity: quantity.value(),
            price: price.value(),
        }
    }
}

// Amounts use `{:?}` so whole numbers keep their ".0". From 1e16 up the
// output switches to exponent form without a sign ("1e16").
impl std::fmt::Display for LedgerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerAction::Deposit { amount } => write!(f, "Deposited: {:?}", amount),
            LedgerAction::Withdrawal { amount } => write!(f, "Withdrew: {:?}", amount),
            LedgerAction::Purchase {
                symbol,
                quantity,
                price,
            } => write!(
                f,
                "Bought {} shares of {} at {:?} each",
                quantity, symbol, price
            ),
            LedgerAction::Sale {
                symbol,
                quantity,
                price,
            } => write!(
                f,
                "Sold {} shares of {} at {:?} each",
                quantity, symbol, price
            ),
        }
    }
}

/// One committed operation and when it happened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub action: LedgerAction,
    pub recorded_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(action: LedgerAction) -> Self {
        Self {
            action,
            recorded_at: Utc::now(),
        }
    }

    /// Human-readable record line
    pub fn description(&self) -> String {
        self.action.to_string()
    }
}

impl std::fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action)
    }
}
