//! Ship definitions and per-ship damage tracking.

use serde::{Deserialize, Serialize};

use crate::core::coord_set::CoordSet;
use crate::core::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship in the fleet configuration: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship on the hidden grid.
///
/// `remaining` starts with exactly `length` coordinates and only ever shrinks
/// as shots land. The ship is sunk once it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    length: usize,
    remaining: CoordSet,
}

impl Ship {
    /// Create a ship of `length` occupying `coords`.
    ///
    /// The coordinate count is not checked here; [`Grid::draw_ship`] refuses
    /// ships that do not cover their full length.
    ///
    /// [`Grid::draw_ship`]: crate::Grid::draw_ship
    pub fn new<I>(length: usize, coords: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        Self {
            length,
            remaining: coords.into_iter().collect(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Coordinates not yet hit.
    pub fn remaining(&self) -> &CoordSet {
        &self.remaining
    }

    /// Remove a hit segment. Returns `false` when `coord` was not (or no
    /// longer) part of this ship, leaving the ship unchanged.
    pub fn remove_hit_coordinate(&mut self, coord: Coordinate) -> bool {
        self.remaining.remove(coord)
    }

    /// Check if every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }
}
