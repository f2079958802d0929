pub mod account;
pub mod ledger_entry;

pub use account::{Account, LedgerResult};
pub use ledger_entry::{LedgerAction, LedgerEntry};
