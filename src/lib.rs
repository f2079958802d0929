//! Trading Simulator Library
//!
//! This library provides a single-account trading ledger (cash, share holdings
//! and an audit trail), the price source seam it trades against, and a
//! console front end that drives one account per session.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
