//! Player-vs-pillar collision and score counting.

use crate::obstacles::{ObstacleField, PassedEvent};
use crate::player::Player;

/// True if the player's hitbox overlaps any live pillar.
pub fn check(player: &Player, field: &ObstacleField) -> bool {
    field
        .obstacles
        .iter()
        .any(|obstacle| player.rect.overlaps(&obstacle.rect))
}

/// Number of pairs completed by a batch of passed events.
///
/// Each pair produces two events (top and bottom), only the primary one counts.
pub fn score_passed(events: &[PassedEvent]) -> u32 {
    events.iter().filter(|event| event.primary).count() as u32
}

/// Pairs passed during the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Add the pairs completed by this tick's passed events.
    pub fn add(&mut self, events: &[PassedEvent]) -> u32 {
        let gained = score_passed(events);
        self.0 = self.0.saturating_add(gained);
        gained
    }
}
