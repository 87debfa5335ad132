//! The game orchestrator.
//!
//! `Game` owns every piece of mutable state: players, the turn phase, the
//! dice rolled this turn, the presented card, the offered actions and the
//! per-property state map. The board is shared and never mutated.
//!
//! ## Driving a game
//!
//! Callers read `current_actions`, check `Action::is_allowed`, and invoke one
//! with `debit_and_perform`. Actions call back into the game to set the next
//! phase and action list.
//!
//! ```
//! use oligopoly::board::presets;
//! use oligopoly::core::TurnPhase;
//! use oligopoly::game::Game;
//!
//! let mut game = Game::new(presets::standard(), 2, 7);
//! assert_eq!(game.phase(), TurnPhase::Start);
//!
//! game.transition_to_premove();
//! let first = game.current_actions()[0].clone();
//! assert_eq!(first.name, "Move");
//!
//! game.debit_and_perform(&first);
//! assert_eq!(game.dice_rolls().len(), 1);
//! ```
//!
//! ## Submodules
//!
//! - `turn`: the phase machine (start, move, end, winner)
//! - `tiles`: tile hooks and contextual actions
//! - `cards`: card resolution
//! - `holdings`: holder actions, item descriptions and stats
//! - `actions`: legality and effects of every `ActionKind`

mod actions;
mod builder;
mod cards;
mod holdings;
mod tiles;
mod turn;

use std::fmt;
use std::sync::Arc;

use log::info;
use rustc_hash::FxHashMap;

pub use builder::GameBuilder;

use crate::board::{Board, Card};
use crate::core::{
    Action, DiceRoll, GameRng, GameRngState, Ledger, Player, PlayerId, PlayerMap, PropertyState,
    TurnPhase,
};

/// Hook fired at every turn start and when a winner is declared.
pub type GameSaver = Box<dyn FnMut(&Game) + Send>;

static UNTOUCHED_PROPERTY: PropertyState = PropertyState::UNTOUCHED;

/// A game in progress.
pub struct Game {
    board: Arc<Board>,
    players: PlayerMap<Player>,
    current: PlayerId,
    phase: TurnPhase,
    /// Rolls this turn, most recent last.
    dice_rolls: Vec<DiceRoll>,
    current_card: Option<Card>,
    current_actions: Vec<Action>,
    turns: u32,
    property_states: FxHashMap<String, PropertyState>,
    rng: GameRng,
    saver: Option<GameSaver>,
}

impl Game {
    /// Start a game where everyone holds the board's starting items.
    ///
    /// Panics if `player_count` is 0.
    #[must_use]
    pub fn new(board: Arc<Board>, player_count: usize, seed: u64) -> Self {
        let start_items = board.start_items().clone();
        Self::with_start_items(board, player_count, &start_items, GameRng::new(seed))
    }

    /// Start a game where everyone holds `start_items`.
    #[must_use]
    pub fn with_start_items(
        board: Arc<Board>,
        player_count: usize,
        start_items: &Ledger,
        rng: GameRng,
    ) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        let players = PlayerMap::new(player_count, |id| Player::new(id, start_items.clone()));

        info!(
            "New game on {:?} with {} players (seed {})",
            board.name(),
            player_count,
            rng.seed()
        );

        let mut game = Self {
            board,
            players,
            current: PlayerId::new(0),
            phase: TurnPhase::Start,
            dice_rolls: Vec::new(),
            current_card: None,
            current_actions: Vec::new(),
            turns: 0,
            property_states: FxHashMap::default(),
            rng,
            saver: None,
        };
        game.start_turn();
        game
    }

    /// Rebuild a game from saved fields. Turn-start effects are not replayed.
    pub(crate) fn restore(
        board: Arc<Board>,
        players: PlayerMap<Player>,
        current: PlayerId,
        turns: u32,
        property_states: FxHashMap<String, PropertyState>,
        finished: bool,
        rng: GameRng,
    ) -> Self {
        Self {
            board,
            players,
            current,
            phase: if finished {
                TurnPhase::Winner
            } else {
                TurnPhase::Start
            },
            dice_rolls: Vec::new(),
            current_card: None,
            current_actions: Vec::new(),
            turns,
            property_states,
            rng,
            saver: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether the current player has moved this turn (or the game is over).
    #[must_use]
    pub fn is_post_move(&self) -> bool {
        self.phase.is_post_move()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == TurnPhase::Winner
    }

    /// Dice rolled this turn, most recent last.
    #[must_use]
    pub fn dice_rolls(&self) -> &[DiceRoll] {
        &self.dice_rolls
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.dice_rolls.last().copied()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current_card.as_ref()
    }

    /// Actions currently offered to the current player.
    #[must_use]
    pub fn current_actions(&self) -> &[Action] {
        &self.current_actions
    }

    /// Replace the offered actions wholesale.
    pub fn set_current_actions(&mut self, actions: Vec<Action>) {
        self.current_actions = actions;
    }

    /// Turns started so far, counting the current one.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Position of the dice stream, for resuming a loaded game on the same rolls.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Install the hook fired at every turn start and on victory.
    pub fn set_game_saver(&mut self, saver: impl FnMut(&Game) + Send + 'static) {
        self.saver = Some(Box::new(saver));
    }

    pub fn clear_game_saver(&mut self) {
        self.saver = None;
    }

    pub(crate) fn fire_saver(&mut self) {
        if let Some(mut saver) = self.saver.take() {
            saver(self);
            self.saver = Some(saver);
        }
    }

    // === Property state ===

    /// State of a property. Untouched properties read as the default.
    ///
    /// Panics if `id` is not a property on this board.
    #[must_use]
    pub fn property_state(&self, id: &str) -> &PropertyState {
        assert!(self.board.is_property(id), "ID is not a property: {id}");
        self.property_states.get(id).unwrap_or(&UNTOUCHED_PROPERTY)
    }

    /// Mutable state of a property, created on first access.
    ///
    /// Panics if `id` is not a property on this board.
    pub fn property_state_mut(&mut self, id: &str) -> &mut PropertyState {
        assert!(self.board.is_property(id), "ID is not a property: {id}");
        self.property_states.entry(id.to_string()).or_default()
    }

    /// Replace the state of a property.
    ///
    /// Panics if `id` is not a property on this board.
    pub fn set_property_state(&mut self, id: &str, state: PropertyState) {
        assert!(self.board.is_property(id), "ID is not a property: {id}");
        self.property_states.insert(id.to_string(), state);
    }

    /// Every property state created so far, sorted by ID.
    #[must_use]
    pub fn property_states(&self) -> Vec<(&str, &PropertyState)> {
        let mut states: Vec<_> = self
            .property_states
            .iter()
            .map(|(id, state)| (id.as_str(), state))
            .collect();
        states.sort_by(|(a, _), (b, _)| a.cmp(b));
        states
    }

    // === Ownership ===

    /// First player (in seat order) holding the item.
    #[must_use]
    pub fn find_owner(&self, id: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.items.has(id))
            .map(|(pid, _)| pid)
    }

    /// Rent a visitor would owe on a property right now.
    ///
    /// Empty when the property is unowned or `id` is not a property.
    #[must_use]
    pub fn rent(&self, id: &str) -> Ledger {
        let (Some(property), Some(owner)) = (self.board.property(id), self.find_owner(id)) else {
            return Ledger::new();
        };
        property.rent(
            self.property_state(id),
            &self.players[owner],
            &self.board,
            self.last_roll(),
        )
    }

    /// Settle a bankrupt player's holdings and mark them dead.
    ///
    /// Everything goes to the last creditor when that player is alive;
    /// otherwise the bank takes it and the player's properties are reset.
    pub fn mark_as_dead(&mut self, id: PlayerId) {
        if !self.players[id].is_alive() {
            return;
        }

        let creditor = self.players[id]
            .last_creditor()
            .filter(|c| self.players[*c].is_alive());

        match creditor {
            Some(creditor) => {
                let estate = self.players[id].items.clone();
                self.players[creditor].items.merge(&estate);
                info!("{} is bankrupt; estate goes to {}", id, creditor);
            }
            None => {
                let board = Arc::clone(&self.board);
                let held: Vec<String> = self.players[id]
                    .items
                    .item_ids()
                    .filter(|item| board.is_property(item))
                    .map(str::to_string)
                    .collect();
                for property in held {
                    self.set_property_state(&property, PropertyState::default());
                }
                info!("{} is bankrupt; estate goes to the bank", id);
            }
        }

        let player = &mut self.players[id];
        player.items.clear();
        player.mark_dead();
    }

    /// Debit an action's cost from the current player, then perform it.
    ///
    /// Legality is the caller's concern; see `Action::is_allowed`.
    pub fn debit_and_perform(&mut self, action: &Action) {
        self.current_player_mut().items.subtract(&action.cost);
        action.perform(self);
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board.name())
            .field("players", &self.players)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("dice_rolls", &self.dice_rolls)
            .field("current_card", &self.current_card.as_ref().map(Card::title))
            .field("current_actions", &self.current_actions)
            .field("turns", &self.turns)
            .field("property_states", &self.property_states)
            .field("has_saver", &self.saver.is_some())
            .finish()
    }
}
