//! Price Oracle Trait
//!
//! This module defines the `PriceOracle` trait, the single seam through which
//! the account ledger learns what a share is worth. The ledger never owns a
//! price source; it holds a shared handle and asks at call time.
//!
//! ## Contract
//! - A successful quote is a [`Price`], which is always strictly positive
//! - A symbol the source cannot quote yields a [`PriceError`], never a
//!   zero or missing price
//! - Calls are synchronous and expected to return promptly

use crate::domain::errors::PriceError;
use crate::domain::value_objects::Price;

/// Common result type for price lookups
pub type PriceResult = Result<Price, PriceError>;

/// Source of current share prices
pub trait PriceOracle: Send + Sync {
    /// Current price for `symbol`
    fn price_of(&self, symbol: &str) -> PriceResult;
}

/// Any `Fn(&str) -> PriceResult` closure is an oracle
impl<F> PriceOracle for F
where
    F: Fn(&str) -> PriceResult + Send + Sync,
{
    fn price_of(&self, symbol: &str) -> PriceResult {
        self(symbol)
    }
}
