//! Checked rules interface for game drivers.
//!
//! `RulesEngine` defines:
//! - Offered and legal actions for the current state
//! - Validated action application
//! - The end-of-game result

pub mod engine;

pub use engine::{GameResult, RulesEngine};
