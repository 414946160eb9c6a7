//! The computer player: random fleet placement plus the targeting AI.

use rand::rngs::SmallRng;

use crate::ai::TargetingAi;
use crate::board::Board;
use crate::common::{Coord, ShotOutcome};
use crate::player::Player;
use crate::view::OpponentView;

pub struct AiPlayer {
    name: String,
    board: Board,
    ai: TargetingAi,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::named("Computer")
    }

    pub fn named(name: impl Into<String>) -> Self {
        AiPlayer {
            name: name.into(),
            board: Board::new(),
            ai: TargetingAi::new(),
        }
    }

    /// The targeting state, for inspection.
    pub fn ai(&self) -> &TargetingAi {
        &self.ai
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn view(&self) -> &OpponentView {
        self.ai.view()
    }

    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        self.board.place_fleet(rng)?;
        Ok(())
    }

    fn choose_shot(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord> {
        Ok(self.ai.choose_shot(rng)?)
    }

    fn register_result(&mut self, coord: Coord, outcome: ShotOutcome) -> anyhow::Result<()> {
        self.ai.register_result(coord, outcome)?;
        Ok(())
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}
