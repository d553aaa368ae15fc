use super::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

pub const NUM_SHIPS: usize = 3;
/// Ships are placed in this order, each seeing the cells taken by the ones before it.
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Battleship", 5),
    ShipDef::new("Destroyer", 4),
    ShipDef::new("Destroyer", 4),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 4;

/// Random anchors tried for one ship before falling back to enumerating every
/// free placement.
pub const MAX_RANDOM_ATTEMPTS: usize = 200;

/// Session namespace used when the caller does not pick one.
pub const DEFAULT_NAMESPACE: &str = "game";

/// Debug command that reveals the hidden grid for one response.
pub const SHOW_COMMAND: &str = "SHOW";
