//! Core game state and logic.

pub mod constants;
pub mod game_logic;
pub mod game_state;

pub use constants::*;
pub use game_logic::*;
pub use game_state::*;
