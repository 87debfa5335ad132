//! Player identification, per-player storage and player records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## Player
//!
//! The mutable record of one seat at the table: ledger, board position,
//! jail status, alive flag and last creditor. Players are never removed;
//! bankrupt players stay in the map marked dead.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::ledger::Ledger;
use crate::board::{Board, Item, PropertyCategory};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use oligopoly::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Seats are shown 1-based to people.
        write!(f, "Player {}", self.0 as u16 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use oligopoly::core::{PlayerId, PlayerMap};
///
/// let mut cash: PlayerMap<i64> = PlayerMap::new(4, |_| 1500);
/// assert_eq!(cash[PlayerId::new(0)], 1500);
///
/// cash[PlayerId::new(1)] -= 200;
/// assert_eq!(cash[PlayerId::new(1)], 1300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Wrap already-built per-player values, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player in the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    number: PlayerId,
    /// Everything the player holds. Negative quantities are debt.
    pub items: Ledger,
    location: usize,
    /// `None` when free, otherwise turns spent in jail.
    turns_in_jail: Option<u32>,
    alive: bool,
    /// `None` means the bank.
    last_creditor: Option<PlayerId>,
}

impl Player {
    /// Create a free, living player at tile 0.
    #[must_use]
    pub fn new(number: PlayerId, items: Ledger) -> Self {
        Self {
            number,
            items,
            location: 0,
            turns_in_jail: None,
            alive: true,
            last_creditor: None,
        }
    }

    /// Rebuild a player from stored fields.
    #[must_use]
    pub fn restore(
        number: PlayerId,
        items: Ledger,
        location: usize,
        turns_in_jail: Option<u32>,
        alive: bool,
        last_creditor: Option<PlayerId>,
    ) -> Self {
        Self {
            number,
            items,
            location,
            turns_in_jail,
            alive,
            last_creditor,
        }
    }

    #[must_use]
    pub fn number(&self) -> PlayerId {
        self.number
    }

    #[must_use]
    pub fn location(&self) -> usize {
        self.location
    }

    pub fn set_location(&mut self, location: usize) {
        self.location = location;
    }

    #[must_use]
    pub fn is_jailed(&self) -> bool {
        self.turns_in_jail.is_some()
    }

    /// Turns spent in jail, or `None` when free.
    #[must_use]
    pub fn turns_in_jail(&self) -> Option<u32> {
        self.turns_in_jail
    }

    /// Advance the jail counter if jailed. Called once per turn start.
    pub fn start_turn(&mut self) {
        if let Some(turns) = self.turns_in_jail.as_mut() {
            *turns += 1;
        }
    }

    /// Teleport to the board's first jail tile.
    ///
    /// Returns `false` (and changes nothing) if the board has no jail.
    pub fn send_to_jail(&mut self, board: &Board) -> bool {
        match board.jail_location() {
            Some(jail) => {
                self.location = jail;
                self.turns_in_jail = Some(0);
                true
            }
            None => false,
        }
    }

    pub fn release_from_jail(&mut self) {
        self.turns_in_jail = None;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }

    #[must_use]
    pub fn last_creditor(&self) -> Option<PlayerId> {
        self.last_creditor
    }

    pub fn set_last_creditor(&mut self, creditor: Option<PlayerId>) {
        self.last_creditor = creditor;
    }

    /// Whether the player holds every property of a category on the board.
    #[must_use]
    pub fn has_monopoly(&self, category: &PropertyCategory, board: &Board) -> bool {
        board
            .items()
            .filter(|(_, item)| matches!(item, Item::Property(p) if p.category() == *category))
            .all(|(id, _)| self.items.has(id))
    }

    /// Number of properties of a category the player holds.
    #[must_use]
    pub fn count_properties(&self, category: &PropertyCategory, board: &Board) -> usize {
        board
            .items()
            .filter(|(id, item)| {
                matches!(item, Item::Property(p) if p.category() == *category) && self.items.has(id)
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::presets;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_jail_counter() {
        let board = presets::standard();
        let mut player = Player::new(PlayerId::new(0), Ledger::new());

        player.start_turn();
        assert_eq!(player.turns_in_jail(), None);

        assert!(player.send_to_jail(&board));
        assert_eq!(player.location(), 10);
        assert_eq!(player.turns_in_jail(), Some(0));

        player.start_turn();
        player.start_turn();
        assert_eq!(player.turns_in_jail(), Some(2));

        player.release_from_jail();
        assert!(!player.is_jailed());
    }

    #[test]
    fn test_send_to_jail_without_jail_tile() {
        let board = presets::deathmatch();
        let mut player = Player::new(PlayerId::new(0), Ledger::new());
        player.set_location(5);

        assert!(!player.send_to_jail(&board));
        assert_eq!(player.location(), 5);
        assert!(!player.is_jailed());
    }

    #[test]
    fn test_monopoly_and_count() {
        let board = presets::standard();
        let mut player = Player::new(PlayerId::new(0), Ledger::new());
        let brown = board.property("BROWN_1").unwrap().category();

        player.items.set("BROWN_1", 1);
        assert!(!player.has_monopoly(&brown, &board));
        assert_eq!(player.count_properties(&brown, &board), 1);

        player.items.set("BROWN_2", 1);
        assert!(player.has_monopoly(&brown, &board));
        assert_eq!(player.count_properties(&brown, &board), 2);
    }
}
