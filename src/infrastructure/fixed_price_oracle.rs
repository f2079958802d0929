//! Fixed Price Oracle
//!
//! In-memory quote table standing in for a market data feed. Lookups are
//! exact, case-sensitive symbol matches. Quotes can be moved at runtime
//! through a shared reference, which is how tests simulate price changes.

use crate::config::SessionConfig;
use crate::domain::errors::PriceError;
use crate::domain::repositories::{PriceOracle, PriceResult};
use crate::domain::value_objects::Price;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

/// Price source backed by a symbol -> price table
#[derive(Debug, Default)]
pub struct FixedPriceOracle {
    prices: RwLock<HashMap<String, Price>>,
}

impl FixedPriceOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the quote table from the session's configured share prices
    ///
    /// Entries that are not valid prices are skipped with a warning.
    pub fn from_config(config: &SessionConfig) -> Self {
        let oracle = Self::new();
        for (symbol, value) in &config.share_prices {
            if let Err(e) = oracle.set_price(symbol, *value) {
                warn!("Skipping configured price for {}: {}", symbol, e);
            }
        }
        oracle
    }

    /// Set or replace the quote for `symbol`
    pub fn set_price(&self, symbol: &str, value: f64) -> Result<(), PriceError> {
        let price = Price::new(value).map_err(|_| PriceError::InvalidQuote {
            symbol: symbol.to_string(),
            price: value,
        })?;

        self.prices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(symbol.to_string(), price);
        debug!("Quote set: {}={}", symbol, price);
        Ok(())
    }

    /// Stop quoting `symbol`
    pub fn remove_price(&self, symbol: &str) -> bool {
        self.prices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(symbol)
            .is_some()
    }

    /// Symbols currently quoted, sorted
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self
            .prices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        symbols.sort();
        symbols
    }
}

impl PriceOracle for FixedPriceOracle {
    fn price_of(&self, symbol: &str) -> PriceResult {
        self.prices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(symbol)
            .copied()
            .ok_or_else(|| PriceError::UnknownSymbol(symbol.to_string()))
    }
}
