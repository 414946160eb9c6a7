//! Common types: coordinates, shot outcomes, and the fatal error taxonomy.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::ship::ShipKind;

/// A board coordinate as `(row, column)`. Valid cells lie in
/// `[0, BOARD_SIZE)` on both axes; out-of-range pairs are representable and
/// handled as ordinary control flow, never as errors.
pub type Coord = (usize, usize);

/// Returns `true` when `coord` lies on the board.
#[inline]
pub fn in_grid(coord: Coord) -> bool {
    coord.0 < BOARD_SIZE && coord.1 < BOARD_SIZE
}

/// The in-grid north/south/west/east neighbors of a cell. Diagonal
/// neighbors are deliberately excluded.
pub fn orthogonal_neighbors(coord: Coord) -> impl Iterator<Item = Coord> {
    let (row, col) = coord;
    [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ]
    .into_iter()
    .filter(|&neighbor| in_grid(neighbor))
}

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Coordinate was off the grid. Nothing changed.
    Invalid,
    /// Cell was already fired at. Nothing changed.
    Repeat,
    /// Open water.
    Miss,
    /// Hit a ship segment without finishing the ship.
    Hit,
    /// Hit the last intact segment; carries the sunken ship's kind.
    Sunk(ShipKind),
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Invalid => write!(f, "INVALID"),
            ShotOutcome::Repeat => write!(f, "REPEAT"),
            ShotOutcome::Miss => write!(f, "MISS"),
            ShotOutcome::Hit => write!(f, "HIT"),
            ShotOutcome::Sunk(kind) => write!(f, "SUNK {}", kind.name()),
        }
    }
}

/// Fatal logic-invariant violations. Expected rejections (placement
/// conflicts, off-grid or repeated shots) are not errors; anything in this
/// enum means the fixed fleet/board assumptions were broken or a caller
/// violated a contract, and is not meant to be caught and retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A ship was constructed from a cell set whose size does not match the
    /// kind's fixed length.
    InvalidShipShape { kind: ShipKind, cells: usize },
    /// Neither 1000 random attempts nor the deterministic sweep could place
    /// a ship. Cannot happen with the standard fleet on a 10x10 board.
    PlacementExhausted { kind: ShipKind },
    /// The AI was asked for a shot with no eligible cell remaining.
    SearchExhausted,
    /// A sunk report named a length with no such ship still afloat.
    NoMatchingShip { length: usize },
    /// Two hits in the active target cluster share neither row nor column.
    UnalignedHits { first: Coord, second: Coord },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidShipShape { kind, cells } => {
                write!(f, "{} requires {} cells, got {}", kind.name(), kind.length(), cells)
            }
            GameError::PlacementExhausted { kind } => {
                write!(f, "no remaining placement for {}", kind.name())
            }
            GameError::SearchExhausted => write!(f, "no more cells to shoot at"),
            GameError::NoMatchingShip { length } => {
                write!(f, "no remaining ship of length {}", length)
            }
            GameError::UnalignedHits { first, second } => {
                write!(f, "cluster hits {:?} and {:?} are not aligned", first, second)
            }
        }
    }
}

impl std::error::Error for GameError {}
