//! Rule engine and opponent AI for two-player naval combat on a 10x10
//! grid: constraint-checked ship placement, fire resolution, and the
//! hunt/target/parity search strategy the computer uses to sink a hidden
//! fleet.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod ui;
mod view;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
pub use ui::*;
pub use view::*;
