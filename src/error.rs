//! Error types.
//!
//! Recoverable failures are reported through these enums. Caller bugs (a
//! property-state lookup on a non-property ID, a game with no players) panic
//! instead.

use crate::core::PlayerId;

/// Failure to read a board definition.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    /// The JSON could not be parsed into a board
    #[error("Invalid board definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A board needs at least one tile
    #[error("Board {0:?} has no tiles")]
    NoTiles(String),
}

/// Failure to restore a saved game.
///
/// Line numbers are 1-based positions in the save text.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// Reading the save file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The save ended before every field was read
    #[error("Unexpected end of save data")]
    UnexpectedEof,

    #[error("Line {line}: expected an integer")]
    InvalidNumber { line: usize },

    #[error("Line {line}: expected true or false")]
    InvalidBoolean { line: usize },

    /// No known board has the saved name
    #[error("Unknown board {0:?}")]
    UnknownBoard(String),

    #[error("Player at position {expected} is numbered {found}")]
    PlayerNumberMismatch { expected: usize, found: i64 },

    #[error("{player} is at location {location}, which is off the board")]
    LocationOutOfRange { player: PlayerId, location: i64 },

    #[error("{player} owes a nonexistent player {creditor}")]
    InvalidCreditor { player: PlayerId, creditor: i64 },

    #[error("Current player index {0} is out of range")]
    CurrentPlayerOutOfRange(i64),

    #[error("Too many players: {0}")]
    TooManyPlayers(i64),

    #[error("A game needs at least one player")]
    NoPlayers,

    /// A property state is keyed by an ID that is not a property on the board
    #[error("{0:?} is not a property on this board")]
    UnknownProperty(String),

    #[error("Property {0:?} is mortgaged but has buildings")]
    MortgagedWithBuildings(String),

    /// An item or property ID appears twice in one saved map
    #[error("Line {line}: {id:?} is listed twice")]
    DuplicateEntry { line: usize, id: String },
}

/// Failure to apply an action through the checked engine path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The action is not offered right now, or its preconditions fail
    #[error("Action not allowed: {0}")]
    ActionNotAllowed(String),

    /// A winner has been declared
    #[error("The game is over")]
    GameOver,
}

/// Result type for loading saves.
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LoadError::InvalidNumber { line: 3 }.to_string(),
            "Line 3: expected an integer"
        );
        assert_eq!(
            LoadError::LocationOutOfRange {
                player: PlayerId::new(1),
                location: 40
            }
            .to_string(),
            "Player 2 is at location 40, which is off the board"
        );
        assert_eq!(
            GameError::ActionNotAllowed("Buy".into()).to_string(),
            "Action not allowed: Buy"
        );
    }
}
