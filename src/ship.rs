//! Ship kinds, orientations, and placed ships.

use core::fmt;

use crate::common::{Coord, GameError};
use crate::config::{CellGrid, BOARD_SIZE};
use crate::grid::Cells;

/// The closed set of fleet members. Each kind carries its fixed length and
/// display name; placement and fleet logic match on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Number of cells the kind occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 1,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Case-insensitive parse of user input: `"h"`, `"v"`, `"horizontal"`
    /// or `"vertical"`. Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Some(Orientation::Horizontal),
            "v" | "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// A ship placed on the board. The occupied cells never change after
/// construction; hits accumulate and stay a subset of the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    cells: CellGrid,
    hits: CellGrid,
}

impl Ship {
    /// Build a ship of `kind` occupying `cells`. Duplicate and off-grid
    /// coordinates are dropped, so the surviving cell count must equal the
    /// kind's length or construction fails.
    pub fn new(
        kind: ShipKind,
        cells: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, GameError> {
        let cells: CellGrid = cells.into_iter().collect();
        if cells.len() != kind.length() {
            return Err(GameError::InvalidShipShape { kind, cells: cells.len() });
        }
        Ok(Ship { kind, cells, hits: CellGrid::new() })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    /// Whether the ship sits on `coord`.
    #[inline]
    pub fn occupies(&self, coord: Coord) -> bool {
        self.cells.contains(coord)
    }

    /// The occupied cells.
    pub fn cells(&self) -> Cells<u128, BOARD_SIZE> {
        self.cells.iter()
    }

    /// Record a hit if `coord` belongs to this ship. Returns whether it was
    /// a valid hit; re-hitting a cell is allowed and changes nothing.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.cells.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    /// A ship is sunk exactly when every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.cells
    }
}
