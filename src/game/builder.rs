//! Builder for new games.

use std::sync::Arc;

use super::{Game, GameSaver};
use crate::board::Board;
use crate::core::{GameRng, Ledger};

/// Builder for creating a `Game`.
///
/// ```
/// use oligopoly::board::presets;
/// use oligopoly::core::Ledger;
/// use oligopoly::game::GameBuilder;
///
/// let game = GameBuilder::new(presets::standard())
///     .player_count(3)
///     .start_items(Ledger::single("MONEY", 500))
///     .seed(42)
///     .build();
///
/// assert_eq!(game.player_count(), 3);
/// assert_eq!(game.current_player().items.get("MONEY"), 500);
/// ```
pub struct GameBuilder {
    board: Arc<Board>,
    player_count: usize,
    start_items: Option<Ledger>,
    seed: Option<u64>,
    saver: Option<GameSaver>,
}

impl GameBuilder {
    /// Two players, the board's starting items, a random seed.
    pub fn new(board: Arc<Board>) -> Self {
        Self {
            board,
            player_count: 2,
            start_items: None,
            seed: None,
            saver: None,
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=255).contains(&count), "Player count must be 1-255");
        self.player_count = count;
        self
    }

    /// Override what every player starts with.
    pub fn start_items(mut self, items: Ledger) -> Self {
        self.start_items = Some(items);
        self
    }

    /// Fix the RNG seed for reproducible dice and draws.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Hook fired at each turn start after the first, and on victory.
    pub fn saver(mut self, saver: impl FnMut(&Game) + Send + 'static) -> Self {
        self.saver = Some(Box::new(saver));
        self
    }

    /// Build the game, already in its first turn.
    pub fn build(self) -> Game {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random_seed(),
        };
        let start_items = self
            .start_items
            .unwrap_or_else(|| self.board.start_items().clone());

        let mut game = Game::with_start_items(self.board, self.player_count, &start_items, rng);
        game.saver = self.saver;
        game
    }
}
