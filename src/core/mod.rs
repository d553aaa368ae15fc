//! Core single-player fleet engine.
//!
//! This module holds the pure game logic: coordinates, grids, ships, random
//! fleet placement and turn processing. It performs no I/O; persistence and
//! rendering live outside it.

pub mod common;
pub mod config;
pub mod coord_set;
pub mod coordinate;
pub mod game;
pub mod grid;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use common::{FireResult, GameError};
pub use config::*;
pub use coord_set::CoordSet;
pub use coordinate::Coordinate;
pub use game::{Command, GameEngine, GameState, GameStatus, TurnOutcome};
pub use grid::{Grid, GridPurpose, GridState, Tile};
pub use placement::{free_coordinates, place_fleet};
pub use ship::{Orientation, Ship, ShipDef};
