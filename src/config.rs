use crate::grid::BitGrid;
use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;

/// Random placement attempts per ship before the deterministic sweep.
pub const MAX_PLACE_ATTEMPTS: usize = 1000;

/// Standard fleet: kind and how many of it each player places.
pub const FLEET: [(ShipKind, usize); 4] = [
    (ShipKind::Battleship, 1),
    (ShipKind::Cruiser, 2),
    (ShipKind::Destroyer, 3),
    (ShipKind::Submarine, 4),
];

pub const TOTAL_SHIP_CELLS: usize = 20;

/// Cell set sized for the game grid.
pub type CellGrid = BitGrid<u128, BOARD_SIZE>;
