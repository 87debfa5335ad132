//! # oligopoly
//!
//! A deterministic rules engine for turn-based property-trading board games.
//!
//! ## Design Principles
//!
//! 1. **Board-Agnostic**: Tiles, items, cards and starting holdings come from
//!    a `Board`. The engine hardcodes no street names or prices.
//!
//! 2. **Everything Is a Ledger**: Money, properties, buildings and cards are
//!    all item quantities. Prices, rents and holdings share one type.
//!
//! 3. **Actions Are Data**: The engine offers `Action` values; the driver
//!    picks one and the engine debits its cost and performs it.
//!
//! ## Architecture
//!
//! - **Seeded RNG**: Dice and card draws come from a `ChaCha8` stream, so a
//!   seed reproduces a whole game.
//!
//! - **Shared Boards**: Boards are immutable and held behind `Arc`, so any
//!   number of games can run on one catalog.
//!
//! ## Modules
//!
//! - `core`: Ledgers, players, RNG, actions, per-property state
//! - `board`: Items, properties, cards, tiles and the preset boards
//! - `game`: The `Game` state machine and its builder
//! - `rules`: `RulesEngine` trait for checked drivers
//! - `io`: Line-oriented save and load
//! - `error`: Error types

pub mod core;
pub mod board;
pub mod game;
pub mod rules;
pub mod io;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Ledger,
    Player, PlayerId, PlayerMap,
    DiceRoll, GameRng, GameRngState,
    Action, ActionKind,
    PropertyState, TurnPhase,
};

pub use crate::board::{
    Board, Item, Property, PropertyCategory, Tile,
    Card, OwnableCard, CardPower,
};

pub use crate::game::{Game, GameBuilder, GameSaver};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::io::Persist;

pub use crate::error::{BoardError, GameError, LoadError, LoadResult};
