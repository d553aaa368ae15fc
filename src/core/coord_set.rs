//! A set of board coordinates packed into a single `u128`.
//!
//! The board has 100 cells, so one bit per cell fits with room to spare.
//! Sets serialize as a list of coordinate strings to keep persisted state
//! readable.

use std::fmt;
use std::ops::{BitAnd, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::core::config::CELL_COUNT;
use crate::core::coordinate::Coordinate;

#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Coordinate>", from = "Vec<Coordinate>")]
pub struct CoordSet {
    bits: u128,
}

impl CoordSet {
    #[inline]
    fn mask() -> u128 {
        (1u128 << CELL_COUNT) - 1
    }

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if the set holds no coordinates.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.bits >> coord.index()) & 1 == 1
    }

    /// Adds `coord`; returns `false` if it was already present.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let present = self.contains(coord);
        self.bits |= 1u128 << coord.index();
        !present
    }

    /// Removes `coord`; returns `true` if it was present.
    pub fn remove(&mut self, coord: Coordinate) -> bool {
        let present = self.contains(coord);
        self.bits &= !(1u128 << coord.index());
        present
    }

    /// Iterator over the coordinates in row-major order.
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter {
            bits: self.bits & Self::mask(),
            idx: 0,
        }
    }
}

impl FromIterator<Coordinate> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl From<Vec<Coordinate>> for CoordSet {
    fn from(coords: Vec<Coordinate>) -> Self {
        coords.into_iter().collect()
    }
}

impl From<CoordSet> for Vec<Coordinate> {
    fn from(set: CoordSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.to_string())).finish()
    }
}

/// Iterator over the members of a [`CoordSet`].
#[derive(Clone, Copy)]
pub struct Iter {
    bits: u128,
    idx: usize,
}

impl Iterator for Iter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < CELL_COUNT {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & 1 == 1 {
                return Coordinate::from_index(idx).ok();
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a CoordSet {
    type Item = Coordinate;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitAnd for CoordSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOrAssign for CoordSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}
