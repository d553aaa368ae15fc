//! Random, non-overlapping fleet placement on the hidden grid.
//!
//! Each ship is placed by rejection sampling: pick an orientation and an anchor
//! that keeps the ship on the board, then walk `length` cells from the anchor.
//! A walk that runs into an occupied cell shifts the anchor one step along the
//! ship's axis (wrapping back to the start of the line) and tries again. After
//! a full lap of the line a fresh random anchor is drawn. Should the random
//! phase run out of attempts, every free placement is enumerated and one is
//! chosen uniformly, so placement either succeeds or proves there is no room.
//!
//! Ships may touch; only direct overlap is refused.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::common::GameError;
use crate::core::config::{BOARD_SIZE, MAX_RANDOM_ATTEMPTS};
use crate::core::coordinate::Coordinate;
use crate::core::grid::Grid;
use crate::core::ship::{Orientation, Ship, ShipDef};

/// Cells covered by a ship of `length` anchored at (`row`, `col`).
///
/// Returns `Ok(None)` if the walk hits an occupied cell; the partial run is
/// discarded. Cells that fall off the board are reported as `OutOfRange`.
fn walk(
    grid: &Grid,
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> Result<Option<Vec<Coordinate>>, GameError> {
    let mut coords = Vec::with_capacity(length);
    for i in 0..length {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        };
        if grid.is_occupied(r, c)? {
            return Ok(None);
        }
        coords.push(Coordinate::new(r, c)?);
    }
    Ok(Some(coords))
}

/// Find `length` free, in-bounds, contiguous coordinates on `grid`.
pub fn free_coordinates<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
    length: usize,
) -> Result<Vec<Coordinate>, GameError> {
    let n = BOARD_SIZE as usize;
    if length == 0 || length > n {
        return Err(GameError::NoRoomForShip { length });
    }

    for attempt in 0..MAX_RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut row = rng.random_range(0..n);
        let mut col = rng.random_range(0..n);
        // resample the extension axis until the ship fits from the anchor
        let start = match orientation {
            Orientation::Horizontal => &mut col,
            Orientation::Vertical => &mut row,
        };
        while *start + length > n {
            *start = rng.random_range(0..n);
        }

        for _ in 0..n {
            if let Some(coords) = walk(grid, row, col, orientation, length)? {
                debug!(
                    "placed length {} {:?} at {} after {} attempt(s)",
                    length,
                    orientation,
                    coords[0],
                    attempt + 1
                );
                return Ok(coords);
            }
            let start = match orientation {
                Orientation::Horizontal => &mut col,
                Orientation::Vertical => &mut row,
            };
            *start = if *start + 1 + length > n { 0 } else { *start + 1 };
        }
    }

    debug!(
        "random placement for length {} exhausted, enumerating free runs",
        length
    );
    let mut candidates = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for row in 0..n {
            for col in 0..n {
                let fits = match orientation {
                    Orientation::Horizontal => col + length <= n,
                    Orientation::Vertical => row + length <= n,
                };
                if !fits {
                    continue;
                }
                if let Some(coords) = walk(grid, row, col, orientation, length)? {
                    candidates.push(coords);
                }
            }
        }
    }
    candidates
        .choose(rng)
        .cloned()
        .ok_or(GameError::NoRoomForShip { length })
}

/// Place and draw each ship of `fleet` in order.
pub fn place_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    fleet: &[ShipDef],
) -> Result<(), GameError> {
    for def in fleet {
        debug!("placing {} ({} cells)", def.name(), def.length());
        let coords = free_coordinates(grid, rng, def.length())?;
        grid.draw_ship(Ship::new(def.length(), coords))?;
    }
    Ok(())
}
