//! Hunt/target shot selection for the computer player.
//!
//! The AI runs a two-state machine. In hunt mode it fires at random,
//! restricted to the even-parity checkerboard while any ship longer than
//! one cell is still afloat. A hit switches it to target mode, where it
//! walks the orthogonal neighbors of the growing hit cluster; once two
//! cluster hits line up it locks the orientation and works outward along
//! the line until the ship goes down.

use log::debug;
use rand::Rng;

use crate::common::{orthogonal_neighbors, Coord, GameError, ShotOutcome};
use crate::config::{CellGrid, FLEET};
use crate::ship::Orientation;
use crate::view::OpponentView;

/// Search phase of the targeting state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    /// No partial ship located; random parity search.
    Hunt,
    /// Finishing off a located ship.
    Target,
}

/// Shot-selection state for the computer player.
///
/// Feed every shot result back through [`TargetingAi::register_result`];
/// [`TargetingAi::choose_shot`] never proposes the same cell twice.
pub struct TargetingAi {
    view: OpponentView,
    untried: CellGrid,
    parity: CellGrid,
    mode: AiMode,
    /// Connected hits on the ship currently being finished off.
    cluster: CellGrid,
    /// Untried cells worth shooting next while in target mode.
    candidates: CellGrid,
    axis: Option<Orientation>,
    /// Ships still afloat, indexed by length.
    afloat_by_length: [usize; 5],
}

impl TargetingAi {
    pub fn new() -> Self {
        let mut afloat_by_length = [0usize; 5];
        for &(kind, count) in FLEET.iter() {
            afloat_by_length[kind.length()] = count;
        }
        TargetingAi {
            view: OpponentView::new(),
            untried: CellGrid::full(),
            parity: CellGrid::even_parity(),
            mode: AiMode::Hunt,
            cluster: CellGrid::new(),
            candidates: CellGrid::new(),
            axis: None,
            afloat_by_length,
        }
    }

    pub fn mode(&self) -> AiMode {
        self.mode
    }

    pub fn view(&self) -> &OpponentView {
        &self.view
    }

    /// How many enemy ships of `length` the AI still believes afloat.
    pub fn remaining_afloat(&self, length: usize) -> usize {
        self.afloat_by_length.get(length).copied().unwrap_or(0)
    }

    // Parity search is only sound while some multi-cell ship remains: every
    // ship of length >= 2 covers at least one even-parity cell.
    fn parity_applies(&self) -> bool {
        self.afloat_by_length
            .iter()
            .enumerate()
            .any(|(length, &count)| length > 1 && count > 0)
    }

    /// Pick the next cell to fire at. The chosen cell is marked tried
    /// before it is returned. `SearchExhausted` means the caller kept
    /// asking after the whole grid was consumed.
    pub fn choose_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        match self.mode {
            AiMode::Hunt => self.hunt_cell(rng),
            AiMode::Target => self.target_cell(rng),
        }
    }

    fn hunt_cell<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        let pool = if self.parity_applies() {
            self.parity & self.untried
        } else {
            self.untried
        };
        let coord = pool.choose(rng).ok_or(GameError::SearchExhausted)?;
        self.take(coord);
        Ok(coord)
    }

    fn target_cell<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        let available = self.candidates & self.untried;
        if available.is_empty() {
            // No viable candidate left. With the orientation unknown the
            // machine reverts to hunting even though the located ship is not
            // sunk yet; a later hit reseeds the cluster. With a known
            // orientation the hunt pick is a one-off and targeting resumes
            // on the next hit.
            if self.axis.is_none() {
                debug!("target candidates exhausted, reverting to hunt");
                self.mode = AiMode::Hunt;
            }
            return self.hunt_cell(rng);
        }
        let pool = match self.axis.zip(self.cluster.first()) {
            Some((Orientation::Horizontal, (row, _))) => {
                let line = available & CellGrid::row(row);
                if line.is_empty() { available } else { line }
            }
            Some((Orientation::Vertical, (_, col))) => {
                let line = available & CellGrid::column(col);
                if line.is_empty() { available } else { line }
            }
            None => available,
        };
        let coord = pool.choose(rng).ok_or(GameError::SearchExhausted)?;
        self.take(coord);
        Ok(coord)
    }

    fn take(&mut self, coord: Coord) {
        self.untried.remove(coord);
        self.parity.remove(coord);
        self.candidates.remove(coord);
    }

    /// Fold a shot result into the view and the targeting state. Whatever
    /// the outcome, the cell will not be proposed again.
    pub fn register_result(&mut self, coord: Coord, outcome: ShotOutcome) -> Result<(), GameError> {
        self.view.register(coord, outcome);
        match outcome {
            ShotOutcome::Hit => match self.mode {
                AiMode::Hunt => self.start_targeting(coord),
                AiMode::Target => self.grow_cluster(coord)?,
            },
            ShotOutcome::Sunk(kind) => {
                let length = kind.length();
                if self.afloat_by_length[length] > 0 {
                    self.afloat_by_length[length] -= 1;
                }
                debug!("{} down, back to hunting", kind);
                self.reset_target_state();
            }
            ShotOutcome::Miss | ShotOutcome::Invalid | ShotOutcome::Repeat => {}
        }
        self.untried.remove(coord);
        self.parity.remove(coord);
        Ok(())
    }

    fn start_targeting(&mut self, seed: Coord) {
        self.mode = AiMode::Target;
        self.cluster = CellGrid::new();
        self.candidates = CellGrid::new();
        self.axis = None;
        self.cluster.insert(seed);
        self.add_neighbor_candidates(seed);
    }

    fn add_neighbor_candidates(&mut self, hit: Coord) {
        for neighbor in orthogonal_neighbors(hit) {
            if self.untried.contains(neighbor) {
                self.candidates.insert(neighbor);
            }
        }
    }

    fn grow_cluster(&mut self, hit: Coord) -> Result<(), GameError> {
        self.cluster.insert(hit);
        if self.axis.is_none() {
            // Any two cluster hits lie on the same straight ship, so the
            // first pair determines the orientation. Unaligned hits would
            // mean the placement adjacency rule was violated.
            let mut cells = self.cluster.iter();
            if let (Some(first), Some(second)) = (cells.next(), cells.next()) {
                self.axis = Some(if first.0 == second.0 {
                    Orientation::Horizontal
                } else if first.1 == second.1 {
                    Orientation::Vertical
                } else {
                    return Err(GameError::UnalignedHits { first, second });
                });
            }
        }
        match self.axis {
            None => self.add_neighbor_candidates(hit),
            Some(axis) => self.extend_along_axis(axis, hit),
        }
        Ok(())
    }

    // With the orientation known, keep only candidates on the ship's line
    // and push the line out one cell past each end of the cluster.
    fn extend_along_axis(&mut self, axis: Orientation, on_line: Coord) {
        match axis {
            Orientation::Horizontal => {
                let row = on_line.0;
                self.candidates = self.candidates & CellGrid::row(row);
                let (mut min_col, mut max_col) = (on_line.1, on_line.1);
                for (_, col) in self.cluster.iter() {
                    min_col = min_col.min(col);
                    max_col = max_col.max(col);
                }
                for next in [(row, min_col.wrapping_sub(1)), (row, max_col + 1)] {
                    if self.untried.contains(next) {
                        self.candidates.insert(next);
                    }
                }
            }
            Orientation::Vertical => {
                let col = on_line.1;
                self.candidates = self.candidates & CellGrid::column(col);
                let (mut min_row, mut max_row) = (on_line.0, on_line.0);
                for (row, _) in self.cluster.iter() {
                    min_row = min_row.min(row);
                    max_row = max_row.max(row);
                }
                for next in [(min_row.wrapping_sub(1), col), (max_row + 1, col)] {
                    if self.untried.contains(next) {
                        self.candidates.insert(next);
                    }
                }
            }
        }
    }

    fn reset_target_state(&mut self) {
        self.mode = AiMode::Hunt;
        self.cluster = CellGrid::new();
        self.candidates = CellGrid::new();
        self.axis = None;
    }
}

impl Default for TargetingAi {
    fn default() -> Self {
        Self::new()
    }
}
