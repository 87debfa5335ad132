//! Checked driver interface over `Game`.
//!
//! `Game` exposes the raw debit-then-perform protocol. `RulesEngine` wraps it
//! for drivers (bots, replays, tests) that want validation:
//! - What actions are on offer and legal
//! - Applying an action only if it is
//! - Whether the game is over

use log::warn;

use crate::core::{Action, PlayerId};
use crate::error::GameError;
use crate::game::Game;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Turns started before the game ended.
    pub turns: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `offered_actions`: everything shown to the player, allowed or not
/// - `apply_action`: must reject anything not offered or not allowed
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Actions shown to the current player: the turn's actions followed by
    /// holder actions for each held item in display order.
    fn offered_actions(&self) -> Vec<Action>;

    /// Apply an offered, allowed action.
    fn apply_action(&mut self, action: &Action) -> Result<(), GameError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Offered actions that are currently allowed.
    fn legal_actions(&self) -> Vec<Action>;
}

impl RulesEngine for Game {
    fn offered_actions(&self) -> Vec<Action> {
        let mut actions = self.current_actions().to_vec();
        let board = self.board();
        for (id, _) in self.current_player().items.sorted_entries(board) {
            actions.extend(self.item_actions(id));
        }
        actions
    }

    fn apply_action(&mut self, action: &Action) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }

        if !self.offered_actions().contains(action) || !action.is_allowed(self) {
            warn!("Rejected action {:?} for {}", action.name, self.current_player_id());
            return Err(GameError::ActionNotAllowed(action.name.clone()));
        }

        self.debit_and_perform(action);
        Ok(())
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.is_finished().then(|| GameResult {
            winner: self.current_player_id(),
            turns: self.turns(),
        })
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.offered_actions()
            .into_iter()
            .filter(|action| action.is_allowed(self))
            .collect()
    }
}
