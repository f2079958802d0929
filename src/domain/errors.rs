use thiserror::Error;

/// Failure raised by a price source when it cannot quote a symbol
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PriceError {
    #[error("No price available for symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid quote for {symbol}: {price}")]
    InvalidQuote { symbol: String, price: f64 },
}

/// Errors returned by account ledger operations
///
/// Every variant is raised before any state is touched, so an `Err` always
/// means the account is exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {amount} (must be a positive number)")]
    InvalidAmount { amount: f64 },

    #[error("Invalid initial deposit: {amount} (must not be negative)")]
    InvalidInitialDeposit { amount: f64 },

    #[error("Balance overflow: crediting {credit} to {balance} is not representable")]
    BalanceOverflow { balance: f64, credit: f64 },

    #[error("Insufficient funds: required {required:.2}, available {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("Invalid quantity: {quantity} (must be a positive whole number)")]
    InvalidQuantity { quantity: i64 },

    #[error("Insufficient shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: String,
        requested: u64,
        held: u64,
    },

    #[error("Holding overflow for {symbol}: {held} held plus {requested} exceeds the share limit")]
    HoldingOverflow {
        symbol: String,
        requested: u64,
        held: u64,
    },

    #[error("Price unavailable: {0}")]
    PriceUnavailable(#[from] PriceError),
}

/// Error kinds without their payload, for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerErrorKind {
    InvalidAmount,
    InsufficientFunds,
    InvalidQuantity,
    InsufficientShares,
    Overflow,
    PriceUnavailable,
}

impl LedgerError {
    pub fn kind(&self) -> LedgerErrorKind {
        match self {
            LedgerError::InvalidAmount { .. } | LedgerError::InvalidInitialDeposit { .. } => {
                LedgerErrorKind::InvalidAmount
            }
            LedgerError::InsufficientFunds { .. } => LedgerErrorKind::InsufficientFunds,
            LedgerError::InvalidQuantity { .. } => LedgerErrorKind::InvalidQuantity,
            LedgerError::InsufficientShares { .. } => LedgerErrorKind::InsufficientShares,
            LedgerError::BalanceOverflow { .. } | LedgerError::HoldingOverflow { .. } => {
                LedgerErrorKind::Overflow
            }
            LedgerError::PriceUnavailable(_) => LedgerErrorKind::PriceUnavailable,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Value must be positive")]
    MustBePositive,

    #[error("Value must be finite")]
    MustBeFinite,
}
