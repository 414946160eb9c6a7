//! The human player: terminal prompts, coordinate labels, fleet tracking.

use std::io::{self, BufRead, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{Coord, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET};
use crate::player::Player;
use crate::ship::Orientation;
use crate::ui;
use crate::view::{FleetTracker, OpponentView};

/// Parse a coordinate label like `"B7"` (row letter A-J, column 1-10,
/// case-insensitive) into a `(row, col)` pair.
pub fn parse_label(input: &str) -> Option<Coord> {
    let s = input.trim();
    let mut chars = s.chars();
    let row_ch = chars.next()?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return None;
    }
    let row = (row_ch as u8 - b'A') as usize;
    let rest = chars.as_str();
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: usize = rest.parse().ok()?;
    if row >= BOARD_SIZE || number < 1 || number > BOARD_SIZE {
        return None;
    }
    Some((row, number - 1))
}

/// Format an in-grid coordinate back into its label, e.g. `(1, 6)` ->
/// `"B7"`.
pub fn format_label(coord: Coord) -> Option<String> {
    if !crate::common::in_grid(coord) {
        return None;
    }
    let (row, col) = coord;
    Some(format!("{}{}", (b'A' + row as u8) as char, col + 1))
}

pub struct CliPlayer {
    board: Board,
    view: OpponentView,
    tracker: FleetTracker,
}

impl CliPlayer {
    pub fn new() -> Self {
        CliPlayer {
            board: Board::new(),
            view: OpponentView::new(),
            tracker: FleetTracker::new(),
        }
    }

    /// Remaining enemy fleet, for display.
    pub fn tracker(&self) -> &FleetTracker {
        &self.tracker
    }

    fn read_line(prompt: &str) -> anyhow::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    fn show_state(&self) {
        let own = ui::render_own_board(&self.board, true);
        let tracking = ui::render_tracking_board(&self.view);
        println!(
            "{}",
            ui::render_side_by_side("YOUR FLEET", &own, "ENEMY WATERS", &tracking)
        );
        print!("{}", ui::render_fleet_status(&self.tracker));
    }
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        "Human"
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn view(&self) -> &OpponentView {
        &self.view
    }

    /// Interactive placement: a label plus orientation per ship, or an
    /// empty line for automatic placement of the rest of the fleet.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        println!("Place your ships as e.g. \"B7 h\"; press enter to place the rest automatically.");
        let kinds: Vec<_> = FLEET
            .iter()
            .flat_map(|&(kind, count)| std::iter::repeat(kind).take(count))
            .collect();
        for (placed, &kind) in kinds.iter().enumerate() {
            loop {
                println!("{}", ui::render_own_board(&self.board, true));
                let line =
                    Self::read_line(&format!("Place {} (length {}): ", kind.name(), kind.length()))?;
                if line.is_empty() {
                    for &kind in &kinds[placed..] {
                        self.board.place_randomly(kind, rng)?;
                    }
                    return Ok(());
                }
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(parse_label);
                let orientation = parts.next().and_then(Orientation::parse);
                match (coord, orientation) {
                    (Some(coord), Some(orientation)) => {
                        if self.board.place_ship(kind, coord, orientation) {
                            break;
                        }
                        println!("That spot is blocked or off the board, try again.");
                    }
                    _ => println!("Could not read that, expected e.g. \"B7 h\"."),
                }
            }
        }
        Ok(())
    }

    /// Prompt until the input names an in-grid cell that has not been
    /// fired at. Bad input is re-prompted, never fatal.
    fn choose_shot(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coord> {
        self.show_state();
        loop {
            let line = Self::read_line("Fire at (e.g. B7): ")?;
            match parse_label(&line) {
                Some(coord) if self.view.is_unknown(coord) => return Ok(coord),
                Some(_) => println!("Already fired there, pick another cell."),
                None => println!("Invalid coordinate, please try again."),
            }
        }
    }

    fn register_result(&mut self, coord: Coord, outcome: ShotOutcome) -> anyhow::Result<()> {
        self.view.register(coord, outcome);
        if let ShotOutcome::Sunk(kind) = outcome {
            self.tracker.record_sunk(kind.length())?;
        }
        Ok(())
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}
