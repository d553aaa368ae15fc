//! Common types: engine errors and fire results.

use thiserror::Error;

/// Result of firing at a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// Shot landed on a ship that still has segments left.
    Hit,
    /// Shot found open water.
    Miss,
    /// Shot removed the last segment of a ship.
    Sunk,
}

/// Errors returned by the grid, placement and engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// User input could not be read as a board coordinate.
    #[error("invalid coordinate {0:?}: expected a row A-J followed by a column 1-10")]
    InvalidCoordinate(String),
    /// Row or column index is outside the 10x10 board.
    #[error("coordinate out of range: row={row}, col={col}")]
    OutOfRange { row: usize, col: usize },
    /// A ship was drawn with fewer coordinates than its length.
    #[error("ship of length {expected} only has {found} coordinates")]
    InsufficientCoordinates { expected: usize, found: usize },
    /// No free straight run of cells is left for a ship.
    #[error("no room left on the grid for a ship of length {length}")]
    NoRoomForShip { length: usize },
    /// A persisted snapshot does not describe a consistent game.
    #[error("corrupt game state: {0}")]
    CorruptState(String),
}
