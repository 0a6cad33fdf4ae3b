//! Flappy - Terminal Flappy Bird Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod clock;
pub mod collision;
pub mod constants;
pub mod core;
pub mod geometry;
pub mod input;
pub mod obstacles;
pub mod player;
pub mod runner;
pub mod scene;
pub mod score_store;
pub mod ui;
pub mod viewport;

pub use constants::*;
pub use crate::core::{Flow, GameState, Screen};
pub use score_store::{FileScoreStore, MemoryScoreStore, ScoreStore};
