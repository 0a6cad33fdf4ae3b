//! One round of play: the per-tick update sequence.

use crate::clock::SpawnTimer;
use crate::collision::{self, Score};
use crate::constants::{SCORE_TOPRIGHT, SPAWN_INTERVAL_MS};
use crate::input::InputEvent;
use crate::obstacles::ObstacleField;
use crate::player::Player;
use crate::scene::{Anchor, Color, Scene, TextStyle};
use rand::Rng;
use std::time::Duration;

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Collision,
    /// `q` or Esc.
    Quit,
    WindowClosed,
}

#[derive(Debug, Clone)]
pub struct Round {
    pub player: Player,
    pub field: ObstacleField,
    pub score: Score,
    pub spawn_timer: SpawnTimer,
    /// Ticks played so far.
    pub tick_count: u64,
}

impl Round {
    /// Fresh player and a field seeded with one pair.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut field = ObstacleField::new();
        field.spawn(rng);
        Self {
            player: Player::new(),
            field,
            score: Score::new(),
            spawn_timer: SpawnTimer::new(Duration::from_millis(SPAWN_INTERVAL_MS)),
            tick_count: 0,
        }
    }

    /// Run one tick: input, physics, obstacles, scoring, collision.
    ///
    /// Returns why the round ended, if it did. On quit the state is left
    /// untouched so the frozen frame is the last one shown.
    pub fn tick<R: Rng>(
        &mut self,
        events: &[InputEvent],
        elapsed: Duration,
        rng: &mut R,
    ) -> Option<RoundEnd> {
        for event in events {
            match event {
                InputEvent::Quit => return Some(RoundEnd::WindowClosed),
                e if e.is_leave() => return Some(RoundEnd::Quit),
                e if e.is_jump() => self.player.jump_request(),
                _ => {}
            }
        }

        self.player.update();

        for _ in 0..self.spawn_timer.poll(elapsed) {
            let pair = self.field.spawn_timed(rng);
            log::debug!(
                "Spawned pair {} (hole_top {}, hole {})",
                pair.pair_id,
                pair.hole_top,
                pair.hole_height
            );
        }
        let passed = self.field.tick();
        self.score.add(&passed);
        self.tick_count += 1;

        if collision::check(&self.player, &self.field) {
            return Some(RoundEnd::Collision);
        }
        None
    }

    pub fn render(&self) -> Scene {
        let mut scene = Scene::new();
        scene.fill_rect(self.player.rect, Color::Gold);
        for obstacle in &self.field.obstacles {
            scene.fill_rect(obstacle.rect, Color::Green2);
        }
        scene.text(
            self.score.value().to_string(),
            SCORE_TOPRIGHT,
            Anchor::TopRight,
            TextStyle::Heading,
            Color::White,
        );
        scene
    }
}
