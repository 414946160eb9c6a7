//! What a player believes about the enemy board.

use crate::common::{Coord, GameError, ShotOutcome};
use crate::config::{CellGrid, FLEET};
use crate::ship::ShipKind;

/// Belief state about the opponent's grid. The three sets partition the
/// full grid: every cell is exactly one of hit, miss, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentView {
    hits: CellGrid,
    misses: CellGrid,
    unknown: CellGrid,
}

impl OpponentView {
    /// A fresh view: the whole grid is unknown.
    pub fn new() -> Self {
        OpponentView {
            hits: CellGrid::new(),
            misses: CellGrid::new(),
            unknown: CellGrid::full(),
        }
    }

    /// Fold a shot result into the view. Only `Hit`, `Sunk` and `Miss`
    /// classify a cell; `Invalid` and `Repeat` are no-ops. A contradictory
    /// later report for the same cell overwrites the earlier classification
    /// instead of erroring.
    pub fn register(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => {
                self.unknown.remove(coord);
                self.hits.insert(coord);
                self.misses.remove(coord);
            }
            ShotOutcome::Miss => {
                self.unknown.remove(coord);
                self.misses.insert(coord);
                self.hits.remove(coord);
            }
            ShotOutcome::Invalid | ShotOutcome::Repeat => {}
        }
    }

    pub fn hits(&self) -> CellGrid {
        self.hits
    }

    pub fn misses(&self) -> CellGrid {
        self.misses
    }

    pub fn unknown(&self) -> CellGrid {
        self.unknown
    }

    /// Whether `coord` has not been fired at yet.
    #[inline]
    pub fn is_unknown(&self, coord: Coord) -> bool {
        self.unknown.contains(coord)
    }
}

impl Default for OpponentView {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-kind count of enemy ships still afloat, kept by the human-tracked
/// side for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetTracker {
    remaining: [(ShipKind, usize); FLEET.len()],
}

impl FleetTracker {
    /// Tracker primed with the full standard fleet.
    pub fn new() -> Self {
        FleetTracker { remaining: FLEET }
    }

    /// Count down one ship of the reported length. Failing to find a kind
    /// of that length with ships left means the caller reported a bogus
    /// sink or double-counted one.
    pub fn record_sunk(&mut self, length: usize) -> Result<(), GameError> {
        for (kind, count) in self.remaining.iter_mut() {
            if kind.length() == length && *count > 0 {
                *count -= 1;
                return Ok(());
            }
        }
        Err(GameError::NoMatchingShip { length })
    }

    /// Remaining `(kind, count)` pairs in fleet order.
    pub fn remaining(&self) -> impl Iterator<Item = (ShipKind, usize)> + '_ {
        self.remaining.iter().copied()
    }

    /// Total ships still afloat.
    pub fn ships_afloat(&self) -> usize {
        self.remaining.iter().map(|&(_, count)| count).sum()
    }
}

impl Default for FleetTracker {
    fn default() -> Self {
        Self::new()
    }
}
