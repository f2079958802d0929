pub mod trading_session;

pub use trading_session::{SessionError, SessionResult, TradingSession};
