//! Turn orchestration for a two-player game.

use anyhow::Result;
use log::info;
use rand::rngs::SmallRng;

use crate::common::{Coord, ShotOutcome};
use crate::player::Player;

/// What happened on one turn, for display and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: String,
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// A game between two players sharing one seeded RNG. The caller drives
/// the loop: [`Game::play_turn`], check [`Game::winner`], then
/// [`Game::switch_turn`].
pub struct Game {
    players: [Box<dyn Player>; 2],
    rng: SmallRng,
    current: usize,
    round: u32,
}

impl Game {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, rng: SmallRng) -> Self {
        Game {
            players: [first, second],
            rng,
            current: 0,
            round: 1,
        }
    }

    /// Both players place their fleets. Must run before the first turn.
    pub fn setup(&mut self) -> Result<()> {
        let [first, second] = &mut self.players;
        first.place_fleet(&mut self.rng)?;
        second.place_fleet(&mut self.rng)?;
        info!("fleets placed, {} opens round 1", self.players[self.current].name());
        Ok(())
    }

    /// The current attacker fires one shot at the opponent's board and
    /// learns the outcome. Off-grid and repeated shots consume the turn
    /// without changing the defender's board.
    pub fn play_turn(&mut self) -> Result<TurnReport> {
        let [first, second] = &mut self.players;
        let (attacker, defender) = if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        };
        let coord = attacker.choose_shot(&mut self.rng)?;
        let outcome = defender.board_mut().fire_at(coord);
        attacker.register_result(coord, outcome)?;
        info!(
            "round {}: {} fires at {:?} -> {}",
            self.round,
            attacker.name(),
            coord,
            outcome
        );
        Ok(TurnReport {
            attacker: attacker.name().to_string(),
            coord,
            outcome,
        })
    }

    /// Hand the attack over to the other player.
    pub fn switch_turn(&mut self) {
        self.current = 1 - self.current;
        self.round += 1;
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn current_player(&self) -> &dyn Player {
        self.players[self.current].as_ref()
    }

    pub fn player(&self, index: usize) -> &dyn Player {
        self.players[index].as_ref()
    }

    /// The player whose opponent's fleet is fully sunk, once there is one.
    /// Only meaningful after [`Game::setup`].
    pub fn winner(&self) -> Option<&dyn Player> {
        let [first, second] = &self.players;
        if second.board().all_ships_sunk() {
            Some(first.as_ref())
        } else if first.board().all_ships_sunk() {
            Some(second.as_ref())
        } else {
            None
        }
    }
}
