//! Player abstraction shared by the human and computer participants.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{Coord, ShotOutcome};
use crate::view::OpponentView;

/// One side of a game: owns its board and its belief about the enemy.
///
/// The RNG is threaded in by the caller so whole games can run off a single
/// seeded generator.
pub trait Player {
    fn name(&self) -> &str;

    /// The player's own board, fired upon by the opponent.
    fn board(&self) -> &Board;

    fn board_mut(&mut self) -> &mut Board;

    /// What this player knows about the enemy board.
    fn view(&self) -> &OpponentView;

    /// Place the full fleet on the player's own board.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<()>;

    /// Pick the next cell to fire at.
    fn choose_shot(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord>;

    /// Learn the result of this player's own shot.
    fn register_result(&mut self, coord: Coord, outcome: ShotOutcome) -> anyhow::Result<()>;
}
