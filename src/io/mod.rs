//! Save and load.
//!
//! A save is plain text with one value per line. Lists and maps are prefixed
//! with their length. Only the durable parts of a game are written: the turn
//! restarts from its beginning after a load, and the RNG is reseeded unless
//! the caller restores one from `Game::rng_state`.

mod deserializer;
mod serializer;

pub use deserializer::Deserializer;
pub use serializer::Serializer;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::info;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::core::{GameRng, Ledger, Player, PlayerId, PlayerMap, PropertyState};
use crate::error::{LoadError, LoadResult};
use crate::game::Game;

/// A value with a line-oriented save representation.
pub trait Persist: Sized {
    fn save(&self, out: &mut Serializer);

    fn load(input: &mut Deserializer<'_>) -> LoadResult<Self>;
}

impl Persist for Ledger {
    fn save(&self, out: &mut Serializer) {
        out.write_int(self.len() as i64);
        for (id, quantity) in self.iter() {
            out.write_str(id);
            out.write_int(quantity);
        }
    }

    fn load(input: &mut Deserializer<'_>) -> LoadResult<Self> {
        let count: usize = input.read_int_as()?;
        let mut ledger = Ledger::new();
        let mut seen = FxHashSet::default();
        for _ in 0..count {
            let id = input.read_str()?;
            if !seen.insert(id.clone()) {
                return Err(LoadError::DuplicateEntry {
                    line: input.line(),
                    id,
                });
            }
            let quantity = input.read_int()?;
            ledger.set(id, quantity);
        }
        Ok(ledger)
    }
}

impl Persist for PropertyState {
    fn save(&self, out: &mut Serializer) {
        out.write_bool(self.is_mortgaged());
        out.write(self.buildings());
    }

    /// Does not check the mortgage invariant; the caller knows the property ID
    /// to report.
    fn load(input: &mut Deserializer<'_>) -> LoadResult<Self> {
        let mortgaged = input.read_bool()?;
        let buildings: Ledger = input.read()?;
        if mortgaged && !buildings.is_empty() {
            return Err(LoadError::MortgagedWithBuildings(String::new()));
        }
        Ok(PropertyState::new(mortgaged, buildings))
    }
}

/// Player fields as stored, before they are checked against the game.
struct SavedPlayer {
    number: i64,
    items: Ledger,
    location: i64,
    turns_in_jail: i64,
    alive: bool,
    last_creditor: i64,
}

impl From<&Player> for SavedPlayer {
    fn from(player: &Player) -> Self {
        Self {
            number: player.number().index() as i64,
            items: player.items.clone(),
            location: player.location() as i64,
            turns_in_jail: player.turns_in_jail().map_or(-1, i64::from),
            alive: player.is_alive(),
            last_creditor: player.last_creditor().map_or(-1, |id| id.index() as i64),
        }
    }
}

impl Persist for SavedPlayer {
    fn save(&self, out: &mut Serializer) {
        out.write_int(self.number);
        out.write(&self.items);
        out.write_int(self.location);
        out.write_int(self.turns_in_jail);
        out.write_bool(self.alive);
        out.write_int(self.last_creditor);
    }

    fn load(input: &mut Deserializer<'_>) -> LoadResult<Self> {
        Ok(Self {
            number: input.read_int()?,
            items: input.read()?,
            location: input.read_int()?,
            turns_in_jail: input.read_int()?,
            alive: input.read_bool()?,
            last_creditor: input.read_int()?,
        })
    }
}

impl SavedPlayer {
    fn into_player(self, position: usize, player_count: usize, board: &Board) -> LoadResult<Player> {
        if self.number != position as i64 {
            return Err(LoadError::PlayerNumberMismatch {
                expected: position,
                found: self.number,
            });
        }
        let number = PlayerId::new(position as u8);

        let location = usize::try_from(self.location)
            .ok()
            .filter(|&location| location < board.tile_count())
            .ok_or(LoadError::LocationOutOfRange {
                player: number,
                location: self.location,
            })?;

        let last_creditor = match self.last_creditor {
            -1 => None,
            creditor if (0..player_count as i64).contains(&creditor) => {
                Some(PlayerId::new(creditor as u8))
            }
            creditor => return Err(LoadError::InvalidCreditor { player: number, creditor }),
        };

        // Any negative jail counter means free.
        let turns_in_jail = u32::try_from(self.turns_in_jail).ok();

        Ok(Player::restore(
            number,
            self.items,
            location,
            turns_in_jail,
            self.alive,
            last_creditor,
        ))
    }
}

impl Game {
    /// Serialize the durable game state.
    ///
    /// Property states are written sorted by ID so equal games give equal text.
    #[must_use]
    pub fn save(&self) -> String {
        let mut out = Serializer::new();
        out.write_str(self.board().name());

        let players: Vec<SavedPlayer> = self.players().values().map(SavedPlayer::from).collect();
        out.write_list(players.iter());

        out.write_int(self.current_player_id().index() as i64);
        out.write_int(i64::from(self.turns()));
        out.write_map(self.property_states().into_iter());
        out.write_bool(self.is_finished());
        out.finish()
    }

    /// Restore a game saved with `save`, picking its board by name.
    pub fn load(text: &str, boards: &[Arc<Board>]) -> LoadResult<Game> {
        Self::load_with_rng(text, boards, GameRng::from_random_seed())
    }

    /// Like `load`, with a caller-supplied RNG.
    ///
    /// Pass `GameRng::from_state(&game.rng_state())` to continue on the dice
    /// the saved game would have rolled.
    ///
    /// The restored game sits at the start of the saved player's turn with no
    /// actions on offer, exactly as a fresh game does before its first
    /// `transition_to_premove`.
    pub fn load_with_rng(text: &str, boards: &[Arc<Board>], rng: GameRng) -> LoadResult<Game> {
        let mut input = Deserializer::new(text);

        let board_name = input.read_str()?;
        let board = boards
            .iter()
            .find(|board| board.name() == board_name)
            .cloned()
            .ok_or(LoadError::UnknownBoard(board_name))?;

        let count = input.read_int()?;
        if count <= 0 {
            return Err(LoadError::NoPlayers);
        }
        if count > 255 {
            return Err(LoadError::TooManyPlayers(count));
        }
        let count = count as usize;
        let mut players = Vec::with_capacity(count);
        for position in 0..count {
            let saved: SavedPlayer = input.read()?;
            players.push(saved.into_player(position, count, &board)?);
        }

        let current = input.read_int()?;
        if !(0..count as i64).contains(&current) {
            return Err(LoadError::CurrentPlayerOutOfRange(current));
        }
        let turns: u32 = input.read_int_as()?;

        let map_count: usize = input.read_int_as()?;
        let mut property_states = FxHashMap::default();
        for _ in 0..map_count {
            let id = input.read_str()?;
            if !board.is_property(&id) {
                return Err(LoadError::UnknownProperty(id));
            }
            if property_states.contains_key(&id) {
                return Err(LoadError::DuplicateEntry {
                    line: input.line(),
                    id,
                });
            }
            let state = match PropertyState::load(&mut input) {
                Err(LoadError::MortgagedWithBuildings(_)) => {
                    return Err(LoadError::MortgagedWithBuildings(id))
                }
                other => other?,
            };
            property_states.insert(id, state);
        }

        let finished = input.read_bool()?;

        info!(
            "Loaded a {count}-player game on {:?} at turn {turns}",
            board.name()
        );
        Ok(Game::restore(
            board,
            PlayerMap::from_vec(players),
            PlayerId::new(current as u8),
            turns,
            property_states,
            finished,
            rng,
        ))
    }

    /// Write `save` output to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, self.save())
    }

    pub fn load_from_file(path: impl AsRef<Path>, boards: &[Arc<Board>]) -> LoadResult<Game> {
        let text = fs::read_to_string(path)?;
        Self::load(&text, boards)
    }
}
