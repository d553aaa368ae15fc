//! Board addressing: rows `A`..`J`, columns `1`..`10`.
//!
//! Internally a [`Coordinate`] stores zero-based row and column indices so it
//! can address arrays directly. Parsing and display use the player-facing form
//! (`"A1"`, `"J10"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::common::GameError;
use crate::core::config::BOARD_SIZE;

const FIRST_ROW: u8 = b'A';

/// A validated cell address on the 10x10 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build a coordinate from zero-based row and column indices.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Parse a player-facing coordinate such as `"b7"` or `"J10"`.
    ///
    /// The row letter is case-insensitive and the column may carry a leading
    /// zero (`"A05"` is `A5`). The whole string must be two or three characters.
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        let invalid = || GameError::InvalidCoordinate(raw.to_string());
        let len = raw.chars().count();
        if !(2..=3).contains(&len) {
            return Err(invalid());
        }
        let mut chars = raw.chars();
        let row_ch = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !row_ch.is_ascii_uppercase() {
            return Err(invalid());
        }
        let row = (row_ch as u8 - FIRST_ROW) as usize;
        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let col: usize = digits.parse().map_err(|_| invalid())?;
        if row >= BOARD_SIZE as usize || col == 0 || col > BOARD_SIZE as usize {
            return Err(invalid());
        }
        Self::new(row, col - 1).map_err(|_| invalid())
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Zero-based column index.
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row letter as shown to the player.
    pub fn row_letter(&self) -> char {
        (FIRST_ROW + self.row) as char
    }

    /// One-based column number as shown to the player.
    pub fn col_number(&self) -> usize {
        self.col as usize + 1
    }

    /// Position of this cell in row-major order.
    pub fn index(&self) -> usize {
        self.row() * BOARD_SIZE as usize + self.col()
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        let n = BOARD_SIZE as usize;
        if index >= n * n {
            return Err(GameError::OutOfRange {
                row: index / n,
                col: index % n,
            });
        }
        Self::new(index / n, index % n)
    }

    /// Every coordinate on the board, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        let n = BOARD_SIZE;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coordinate { row, col }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col_number())
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Coordinate> for String {
    fn from(coord: Coordinate) -> Self {
        coord.to_string()
    }
}

impl TryFrom<String> for Coordinate {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
