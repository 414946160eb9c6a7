//! Board state: placement validation, occupancy index, fire resolution.

use std::collections::HashMap;

use log::debug;
use rand::Rng;

use crate::common::{in_grid, orthogonal_neighbors, Coord, GameError, ShotOutcome};
use crate::config::{CellGrid, BOARD_SIZE, FLEET, MAX_PLACE_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipKind};

/// One player's board: the placed ships, an occupancy index from cell to
/// owning ship, and the sets of incoming hits and misses.
pub struct Board {
    ships: Vec<Ship>,
    occupied: HashMap<Coord, usize>,
    hits: CellGrid,
    misses: CellGrid,
}

impl Board {
    /// An empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            occupied: HashMap::new(),
            hits: CellGrid::new(),
            misses: CellGrid::new(),
        }
    }

    /// The placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Incoming shots that struck a ship.
    pub fn hits(&self) -> CellGrid {
        self.hits
    }

    /// Incoming shots that struck open water.
    pub fn misses(&self) -> CellGrid {
        self.misses
    }

    /// Whether any ship occupies `coord`.
    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupied.contains_key(&coord)
    }

    /// Index into [`Board::ships`] of the ship occupying `coord`.
    pub fn ship_index_at(&self, coord: Coord) -> Option<usize> {
        self.occupied.get(&coord).copied()
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ship_index_at(coord).map(|index| &self.ships[index])
    }

    /// True once every placed ship is sunk. Vacuously true on an empty
    /// board, so only meaningful after placement.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Try to place a ship of `kind` with its bow at `start`, extending
    /// right (horizontal) or down (vertical). Returns `false` on any
    /// rejection (off-grid start or stern, overlap, or orthogonal contact
    /// with another ship) without mutating anything. Diagonal contact
    /// between ships is allowed.
    pub fn place_ship(&mut self, kind: ShipKind, start: Coord, orientation: Orientation) -> bool {
        if !in_grid(start) {
            return false;
        }
        let (row, col) = start;
        let len = kind.length();
        let stern = match orientation {
            Orientation::Horizontal => (row, col + len - 1),
            Orientation::Vertical => (row + len - 1, col),
        };
        if !in_grid(stern) {
            return false;
        }
        let cells: Vec<Coord> = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();
        if cells.iter().any(|cell| self.occupied.contains_key(cell)) {
            return false;
        }
        if self.has_orthogonal_conflict(&cells) {
            return false;
        }
        let Ok(ship) = Ship::new(kind, cells.iter().copied()) else {
            return false;
        };
        let index = self.ships.len();
        self.ships.push(ship);
        for cell in cells {
            self.occupied.insert(cell, index);
        }
        true
    }

    // Ships must keep one cell of orthogonal distance from each other.
    fn has_orthogonal_conflict(&self, cells: &[Coord]) -> bool {
        cells.iter().any(|&cell| {
            orthogonal_neighbors(cell)
                .any(|neighbor| !cells.contains(&neighbor) && self.occupied.contains_key(&neighbor))
        })
    }

    /// Place the full standard fleet, ship by ship in stable [`FLEET`]
    /// order: up to [`MAX_PLACE_ATTEMPTS`] uniform random placements, then
    /// a deterministic raster sweep. The sweep always succeeds for the
    /// standard fleet on a 10x10 board; `PlacementExhausted` means the
    /// fixed-fleet assumptions were broken.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for &(kind, count) in FLEET.iter() {
            for _ in 0..count {
                self.place_randomly(kind, rng)?;
            }
        }
        Ok(())
    }

    /// Place a single ship of `kind` by the same random-then-sweep scheme
    /// [`Board::place_fleet`] uses.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        kind: ShipKind,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let len = kind.length();
        for _ in 0..MAX_PLACE_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // Start coordinate drawn so the stern stays on the board.
            let start = match orientation {
                Orientation::Horizontal => {
                    (rng.random_range(0..BOARD_SIZE), rng.random_range(0..=BOARD_SIZE - len))
                }
                Orientation::Vertical => {
                    (rng.random_range(0..=BOARD_SIZE - len), rng.random_range(0..BOARD_SIZE))
                }
            };
            if self.place_ship(kind, start, orientation) {
                debug!("placed {} at {:?} {:?}", kind, start, orientation);
                return Ok(());
            }
        }
        // Deterministic fallback: horizontal placements row-major, then
        // vertical placements column-major, first fit wins.
        for row in 0..BOARD_SIZE {
            for col in 0..=BOARD_SIZE - len {
                if self.place_ship(kind, (row, col), Orientation::Horizontal) {
                    debug!("placed {} at ({}, {}) by sweep", kind, row, col);
                    return Ok(());
                }
            }
        }
        for col in 0..BOARD_SIZE {
            for row in 0..=BOARD_SIZE - len {
                if self.place_ship(kind, (row, col), Orientation::Vertical) {
                    debug!("placed {} at ({}, {}) by sweep", kind, row, col);
                    return Ok(());
                }
            }
        }
        Err(GameError::PlacementExhausted { kind })
    }

    /// Resolve a shot at `coord`. Off-grid and already-fired cells report
    /// [`ShotOutcome::Invalid`] and [`ShotOutcome::Repeat`] without
    /// mutating, so firing twice at a cell never double-counts.
    pub fn fire_at(&mut self, coord: Coord) -> ShotOutcome {
        if !in_grid(coord) {
            return ShotOutcome::Invalid;
        }
        if self.hits.contains(coord) || self.misses.contains(coord) {
            return ShotOutcome::Repeat;
        }
        match self.occupied.get(&coord).copied() {
            Some(index) => {
                self.hits.insert(coord);
                let ship = &mut self.ships[index];
                ship.register_hit(coord);
                if ship.is_sunk() {
                    ShotOutcome::Sunk(ship.kind())
                } else {
                    ShotOutcome::Hit
                }
            }
            None => {
                self.misses.insert(coord);
                ShotOutcome::Miss
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
