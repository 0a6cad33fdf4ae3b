//! Core game state and logic.

pub mod game_state;
pub mod menu;
pub mod round;

pub use game_state::{Flow, GameState, RoundOver, Screen};
pub use menu::{Menu, MenuAction};
pub use round::{Round, RoundEnd};
