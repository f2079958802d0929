pub mod console_handler;

pub use console_handler::{Command, ConsoleError, ConsoleHandler, Reply};
