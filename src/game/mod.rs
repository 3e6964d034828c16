//! Match loop pieces: the board and its configuration

mod board;
mod config;

pub use board::{Board, GameError, Outcome};
pub use config::{DEFAULT_TURN_LIMIT, GameConfig};
