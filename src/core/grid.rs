//! Tile grids: the hidden fleet grid and the visible shot grid.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::common::GameError;
use crate::core::config::{BOARD_SIZE, CELL_COUNT};
use crate::core::coordinate::Coordinate;
use crate::core::ship::Ship;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Visible grid default: nothing fired here yet.
    EmptyUnknown,
    Miss,
    Hit,
    /// Occupied by a ship segment (hidden grid only).
    Ship,
    /// Hidden grid default, and what a hit segment turns into.
    EmptyNoShip,
}

/// Which grid a [`Grid`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridPurpose {
    /// True ship locations.
    Hidden,
    /// What the player has learned so far.
    Visible,
}

impl GridPurpose {
    /// Tile every cell starts with.
    pub fn default_tile(self) -> Tile {
        match self {
            GridPurpose::Hidden => Tile::EmptyNoShip,
            GridPurpose::Visible => Tile::EmptyUnknown,
        }
    }
}

/// Serializable grid snapshot for saving games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub purpose: GridPurpose,
    pub tiles: Vec<Tile>,
    pub ships: Vec<Ship>,
}

/// A full 10x10 grid of tiles plus the ships drawn onto it.
///
/// Every coordinate always has exactly one tile; the tile vector is sized once
/// at construction and only ever overwritten in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    purpose: GridPurpose,
    tiles: Vec<Tile>,
    ships: Vec<Ship>,
}

impl Grid {
    /// Allocate all 100 cells set to the default tile for `purpose`.
    pub fn initialize(purpose: GridPurpose) -> Self {
        Grid {
            purpose,
            tiles: vec![purpose.default_tile(); CELL_COUNT],
            ships: Vec::new(),
        }
    }

    pub fn purpose(&self) -> GridPurpose {
        self.purpose
    }

    /// Returns `true` when a ship segment sits at (`row`, `col`).
    ///
    /// Indices are zero-based. Placement derives them arithmetically, so they
    /// are range-checked here rather than trusted.
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, GameError> {
        let coord = Coordinate::new(row, col)?;
        Ok(self.tile(coord) == Tile::Ship)
    }

    /// Tile at `coord`.
    pub fn tile(&self, coord: Coordinate) -> Tile {
        self.tiles[coord.index()]
    }

    /// Overwrite the tile at `coord`.
    pub fn set_tile(&mut self, coord: Coordinate, tile: Tile) {
        self.tiles[coord.index()] = tile;
    }

    /// Number of cells currently holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Row-major iterator over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        Coordinate::all().zip(self.tiles.iter().copied())
    }

    /// Tiles of one zero-based row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        let n = BOARD_SIZE as usize;
        if row >= n {
            return None;
        }
        self.tiles.get(row * n..(row + 1) * n)
    }

    /// Mark every coordinate of `ship` as [`Tile::Ship`] and take ownership of it.
    pub fn draw_ship(&mut self, ship: Ship) -> Result<(), GameError> {
        let found = ship.remaining().len();
        if found < ship.length() {
            return Err(GameError::InsufficientCoordinates {
                expected: ship.length(),
                found,
            });
        }
        for coord in ship.remaining() {
            self.set_tile(coord, Tile::Ship);
        }
        debug!(
            "drew ship of length {} at {:?} on {:?} grid",
            ship.length(),
            ship.remaining(),
            self.purpose
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Ships drawn onto this grid, in drawing order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    /// Map every still-unhit ship coordinate to the index of its ship.
    pub fn collect_occupied_coordinates(&self) -> BTreeMap<Coordinate, usize> {
        self.ships
            .iter()
            .enumerate()
            .flat_map(|(i, ship)| ship.remaining().iter().map(move |c| (c, i)))
            .collect()
    }
}

impl From<&Grid> for GridState {
    fn from(grid: &Grid) -> Self {
        GridState {
            purpose: grid.purpose,
            tiles: grid.tiles.clone(),
            ships: grid.ships.clone(),
        }
    }
}

impl TryFrom<GridState> for Grid {
    type Error = GameError;

    fn try_from(state: GridState) -> Result<Self, Self::Error> {
        if state.tiles.len() != CELL_COUNT {
            return Err(GameError::CorruptState(format!(
                "{:?} grid has {} tiles, expected {}",
                state.purpose,
                state.tiles.len(),
                CELL_COUNT
            )));
        }
        Ok(Grid {
            purpose: state.purpose,
            tiles: state.tiles,
            ships: state.ships,
        })
    }
}
