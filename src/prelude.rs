//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    Command, Coordinate, FireResult, GameEngine, GameError, GameStatus, TurnOutcome,
};
pub use crate::session::{play_turn, FileSession, MemorySession, Response, SessionStore};
pub use crate::{init_logging, render_board};
