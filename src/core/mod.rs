//! Core engine types: ledger, players, RNG, actions, per-property state.
//!
//! These are the building blocks every rule operates on. The board catalog
//! lives in `board`; the orchestrating `Game` lives in `game`.

pub mod ledger;
pub mod player;
pub mod rng;
pub mod action;
pub mod state;

pub use ledger::Ledger;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{DiceRoll, GameRng, GameRngState};
pub use action::{Action, ActionKind};
pub use state::{PropertyState, TurnPhase};
