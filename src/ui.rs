//! Text rendering of boards and fleet status.
//!
//! Everything here builds plain strings; the binary decides where they go.
//! Rows are labelled A-J, columns 1-10, matching the coordinate labels the
//! CLI accepts ("B7").

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::view::{FleetTracker, OpponentView};

const HIT: char = 'X';
const MISS: char = 'O';
const SHIP: char = 'S';
const WATER: char = '~';

fn render_grid(cell: impl Fn(usize, usize) -> char) -> String {
    let mut out = String::from("  ");
    for col in 1..=BOARD_SIZE {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');
    for row in 0..BOARD_SIZE {
        out.push((b'A' + row as u8) as char);
        out.push(' ');
        for col in 0..BOARD_SIZE {
            out.push_str(&format!("{:>3}", cell(row, col)));
        }
        out.push('\n');
    }
    out
}

/// A player's own board: incoming hits and misses, plus the ships
/// themselves when `reveal_ships` is set.
pub fn render_own_board(board: &Board, reveal_ships: bool) -> String {
    render_grid(|row, col| {
        let coord = (row, col);
        if board.hits().contains(coord) {
            HIT
        } else if board.misses().contains(coord) {
            MISS
        } else if reveal_ships && board.is_occupied(coord) {
            SHIP
        } else {
            WATER
        }
    })
}

/// The enemy board as a player believes it to be.
pub fn render_tracking_board(view: &OpponentView) -> String {
    render_grid(|row, col| {
        let coord = (row, col);
        if view.hits().contains(coord) {
            HIT
        } else if view.misses().contains(coord) {
            MISS
        } else {
            WATER
        }
    })
}

/// Two rendered grids next to each other under their titles.
pub fn render_side_by_side(left_title: &str, left: &str, right_title: &str, right: &str) -> String {
    const GAP: &str = "      ";
    let left_lines: Vec<&str> = left.lines().collect();
    let right_lines: Vec<&str> = right.lines().collect();
    let width = left_lines.iter().map(|line| line.len()).max().unwrap_or(0);

    let mut out = format!("{:<width$}{}{}\n", left_title, GAP, right_title, width = width);
    for i in 0..left_lines.len().max(right_lines.len()) {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        out.push_str(&format!("{:<width$}{}{}\n", l, GAP, r, width = width));
    }
    out
}

/// One line per fleet entry with the count still afloat.
pub fn render_fleet_status(tracker: &FleetTracker) -> String {
    let mut out = String::from("Enemy fleet still afloat:\n");
    for (kind, count) in tracker.remaining() {
        out.push_str(&format!(
            "  {} ({} cells): {} remaining\n",
            kind.name(),
            kind.length(),
            count
        ));
    }
    out
}
