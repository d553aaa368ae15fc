use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{
    common::{FireResult, GameError},
    config::{FLEET, SHOW_COMMAND},
    coord_set::CoordSet,
    coordinate::Coordinate,
    grid::{Grid, GridPurpose, GridState, Tile},
    placement::place_fleet,
    ship::Ship,
};

/// One line of player input, once it has been recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reveal the hidden grid for this response only.
    Show,
    /// Fire at a coordinate.
    Fire(Coordinate),
}

impl Command {
    /// Recognise `SHOW` (any case) or a coordinate.
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        if raw.eq_ignore_ascii_case(SHOW_COMMAND) {
            return Ok(Command::Show);
        }
        Coordinate::parse(raw).map(Command::Fire)
    }
}

/// What a processed command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// `SHOW` was requested; nothing changed.
    Shown,
    /// A shot was fired and resolved.
    Fired { coord: Coordinate, result: FireResult },
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOutcome::Shown => Ok(()),
            TurnOutcome::Fired {
                coord,
                result: FireResult::Hit,
            } => write!(f, "HIT AT {}", coord),
            TurnOutcome::Fired {
                coord,
                result: FireResult::Miss,
            } => write!(f, "MISS AT {}", coord),
            TurnOutcome::Fired {
                result: FireResult::Sunk,
                ..
            } => write!(f, "SHIP SUNK"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingInput,
    /// Every ship segment has been hit; `turns` is the final score.
    GameOver { turns: u32 },
}

/// Serializable overall game state, saved between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub visible: GridState,
    pub hidden: GridState,
    /// Unhit ship coordinates mapped to the index of their ship.
    pub fleet_index: BTreeMap<Coordinate, usize>,
    pub turns: u32,
}

/// Single-player game: both grids, the fleet index and the turn counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    visible: Grid,
    hidden: Grid,
    fleet_index: BTreeMap<Coordinate, usize>,
    turns: u32,
}

impl GameEngine {
    /// Start a new game with the standard fleet placed at random.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut hidden = Grid::initialize(GridPurpose::Hidden);
        place_fleet(&mut hidden, rng, &FLEET)?;
        let engine = Self::from_hidden(hidden);
        info!(
            "new game: {} ships covering {} cells",
            engine.hidden.ships().len(),
            engine.fleet_index.len()
        );
        Ok(engine)
    }

    /// Start a game with a fixed fleet instead of a random one.
    pub fn with_ships<I>(ships: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Ship>,
    {
        let mut hidden = Grid::initialize(GridPurpose::Hidden);
        for ship in ships {
            hidden.draw_ship(ship)?;
        }
        let engine = Self::from_hidden(hidden);
        engine.validate()?;
        Ok(engine)
    }

    fn from_hidden(hidden: Grid) -> Self {
        let fleet_index = hidden.collect_occupied_coordinates();
        Self {
            visible: Grid::initialize(GridPurpose::Visible),
            hidden,
            fleet_index,
            turns: 0,
        }
    }

    /// The player's grid of hits and misses.
    pub fn visible(&self) -> &Grid {
        &self.visible
    }

    /// The grid holding the fleet.
    pub fn hidden(&self) -> &Grid {
        &self.hidden
    }

    pub fn fleet_index(&self) -> &BTreeMap<Coordinate, usize> {
        &self.fleet_index
    }

    /// Number of fire commands processed so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        if self.fleet_index.is_empty() {
            GameStatus::GameOver { turns: self.turns }
        } else {
            GameStatus::AwaitingInput
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status(), GameStatus::GameOver { .. })
    }

    /// Parse and run one line of input. Invalid input leaves the game untouched.
    pub fn handle_input(&mut self, raw: &str) -> Result<TurnOutcome, GameError> {
        match Command::parse(raw)? {
            Command::Show => Ok(TurnOutcome::Shown),
            Command::Fire(coord) => {
                let result = self.fire(coord)?;
                Ok(TurnOutcome::Fired { coord, result })
            }
        }
    }

    /// Fire at `coord`, updating both grids, the fleet and the turn counter.
    ///
    /// A cell that was already hit no longer holds a ship on the hidden grid,
    /// so firing at it again resolves as a miss that keeps its `Hit` mark.
    pub fn fire(&mut self, coord: Coordinate) -> Result<FireResult, GameError> {
        let result = if self.hidden.is_occupied(coord.row(), coord.col())? {
            let ship_index = self.fleet_index.get(&coord).copied().ok_or_else(|| {
                GameError::CorruptState(format!(
                    "ship tile at {} is not in the fleet index",
                    coord
                ))
            })?;
            let ship = self.hidden.ship_mut(ship_index).ok_or_else(|| {
                GameError::CorruptState(format!(
                    "fleet index points at missing ship {}",
                    ship_index
                ))
            })?;
            let removed = ship.remove_hit_coordinate(coord);
            let sunk = removed && ship.is_sunk();

            self.hidden.set_tile(coord, Tile::EmptyNoShip);
            self.visible.set_tile(coord, Tile::Hit);
            self.fleet_index.remove(&coord);

            if sunk {
                FireResult::Sunk
            } else {
                FireResult::Hit
            }
        } else {
            if self.visible.tile(coord) != Tile::Hit {
                self.visible.set_tile(coord, Tile::Miss);
            }
            FireResult::Miss
        };
        self.turns += 1;
        debug!("turn {}: {:?} at {}", self.turns, result, coord);
        if result != FireResult::Miss && self.fleet_index.is_empty() {
            info!("fleet destroyed after {} turns", self.turns);
        }
        Ok(result)
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            visible: GridState::from(&self.visible),
            hidden: GridState::from(&self.hidden),
            fleet_index: self.fleet_index.clone(),
            turns: self.turns,
        }
    }

    /// Restore an engine from a previously saved state, rejecting snapshots
    /// whose grids, fleet and index disagree.
    pub fn from_state(state: GameState) -> Result<Self, GameError> {
        let engine = Self {
            visible: Grid::try_from(state.visible)?,
            hidden: Grid::try_from(state.hidden)?,
            fleet_index: state.fleet_index,
            turns: state.turns,
        };
        engine.validate()?;
        Ok(engine)
    }

    fn validate(&self) -> Result<(), GameError> {
        let corrupt = |msg: String| Err(GameError::CorruptState(msg));
        if self.visible.purpose() != GridPurpose::Visible
            || self.hidden.purpose() != GridPurpose::Hidden
        {
            return corrupt("grid purposes are swapped".to_string());
        }

        let mut occupied = CoordSet::new();
        for (i, ship) in self.hidden.ships().iter().enumerate() {
            if ship.remaining().len() > ship.length() {
                return corrupt(format!(
                    "ship {} has {} coordinates left but length {}",
                    i,
                    ship.remaining().len(),
                    ship.length()
                ));
            }
            if let Some(shared) = (occupied & *ship.remaining()).iter().next() {
                return corrupt(format!("ships overlap at {}", shared));
            }
            occupied |= *ship.remaining();
        }

        if self.fleet_index != self.hidden.collect_occupied_coordinates() {
            return corrupt(
                "fleet index does not match the remaining ship coordinates".to_string(),
            );
        }
        if let Some((coord, tile)) = self
            .visible
            .cells()
            .find(|(_, t)| matches!(t, Tile::Ship | Tile::EmptyNoShip))
        {
            return corrupt(format!("visible grid holds {:?} at {}", tile, coord));
        }
        for (coord, tile) in self.hidden.cells() {
            if !matches!(tile, Tile::Ship | Tile::EmptyNoShip)
                || (tile == Tile::Ship) != occupied.contains(coord)
            {
                return corrupt(format!(
                    "hidden tile {:?} at {} disagrees with the fleet",
                    tile, coord
                ));
            }
        }
        Ok(())
    }
}
