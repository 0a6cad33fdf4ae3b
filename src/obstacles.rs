//! Scrolling pillar pairs and the field that spawns them.

use crate::constants::{
    HOLE_HEIGHT_FLOOR, HOLE_HEIGHT_START, HOLE_MARGIN, HOLE_SHRINK_EVERY, HOLE_SHRINK_STEP,
    OBSTACLE_SPEED, OBSTACLE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::geometry::Rect;
use rand::Rng;

/// Smallest `hole_top` a pair may use.
pub const MIN_HOLE_TOP: i32 = HOLE_MARGIN + 1;

/// Largest hole that still leaves a non-empty `hole_top` range.
pub const MAX_HOLE_HEIGHT: i32 = SCREEN_HEIGHT - HOLE_MARGIN - MIN_HOLE_TOP;

/// One pillar of a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub rect: Rect,
    /// Spawn event this pillar belongs to.
    pub pair_id: u64,
    /// The top pillar is primary; only primaries count toward the score.
    pub primary: bool,
}

/// A freshly generated top/bottom pair sharing one gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstaclePair {
    pub pair_id: u64,
    pub hole_top: i32,
    pub hole_height: i32,
    pub top: Obstacle,
    pub bottom: Obstacle,
}

impl ObstaclePair {
    /// Generate a pair whose gap fits on screen with the edge margins.
    pub fn generate<R: Rng>(pair_id: u64, hole_height: i32, rng: &mut R) -> Self {
        let hole_height = clamp_hole_height(hole_height);
        let hole_top = rng.gen_range(MIN_HOLE_TOP..=SCREEN_HEIGHT - HOLE_MARGIN - hole_height);

        let mut top = Rect::new(0, 0, OBSTACLE_WIDTH, hole_top - 1);
        top.set_right(SCREEN_WIDTH);

        let mut bottom = Rect::new(0, 0, OBSTACLE_WIDTH, SCREEN_HEIGHT - hole_top - hole_height);
        bottom.set_right(SCREEN_WIDTH);
        bottom.set_bottom(SCREEN_HEIGHT);

        Self {
            pair_id,
            hole_top,
            hole_height,
            top: Obstacle {
                rect: top,
                pair_id,
                primary: true,
            },
            bottom: Obstacle {
                rect: bottom,
                pair_id,
                primary: false,
            },
        }
    }
}

/// Keep the hole between the shrink floor and the largest size the screen allows.
pub fn clamp_hole_height(hole_height: i32) -> i32 {
    hole_height.clamp(HOLE_HEIGHT_FLOOR, MAX_HOLE_HEIGHT)
}

/// A pillar that scrolled off the left edge this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassedEvent {
    pub pair_id: u64,
    pub primary: bool,
}

/// All live pillars plus the hole-shrink state.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    pub hole_height: i32,
    /// Timed spawns so far (the seed spawn is not counted).
    pub spawn_count: u32,
    next_pair_id: u64,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            hole_height: HOLE_HEIGHT_START,
            spawn_count: 0,
            next_pair_id: 0,
        }
    }

    /// Add one pair using the current hole height and return a copy of it.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> ObstaclePair {
        let pair = ObstaclePair::generate(self.next_pair_id, self.hole_height, rng);
        self.next_pair_id += 1;
        self.obstacles.push(pair.top.clone());
        self.obstacles.push(pair.bottom.clone());
        pair
    }

    /// Spawn fired by the spawn timer. Counts toward the hole shrink.
    pub fn spawn_timed<R: Rng>(&mut self, rng: &mut R) -> ObstaclePair {
        let pair = self.spawn(rng);
        self.spawn_count += 1;
        self.maybe_shrink(self.spawn_count);
        pair
    }

    /// Every 5th spawn narrows the hole by 10, down to the floor.
    pub fn maybe_shrink(&mut self, spawn_count: u32) {
        if spawn_count > 0 && spawn_count % HOLE_SHRINK_EVERY == 0 {
            self.hole_height = (self.hole_height - HOLE_SHRINK_STEP).max(HOLE_HEIGHT_FLOOR);
        }
    }

    /// Scroll every pillar left and drop the ones past the left edge.
    pub fn tick(&mut self) -> Vec<PassedEvent> {
        let mut passed = Vec::new();
        self.obstacles.retain_mut(|obstacle| {
            obstacle.rect.move_by(-OBSTACLE_SPEED, 0);
            if obstacle.rect.right() < 0 {
                passed.push(PassedEvent {
                    pair_id: obstacle.pair_id,
                    primary: obstacle.primary,
                });
                false
            } else {
                true
            }
        });
        passed
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_pair_partitions_screen() {
        let mut rng = create_test_rng();
        for hole_height in [150, 200, 250] {
            for id in 0..500 {
                let pair = ObstaclePair::generate(id, hole_height, &mut rng);
                assert!(pair.hole_top >= 21);
                assert!(pair.hole_top <= SCREEN_HEIGHT - 20 - hole_height);
                assert_eq!(
                    pair.hole_top + pair.hole_height + pair.bottom.rect.height,
                    SCREEN_HEIGHT
                );
                assert_eq!(pair.top.rect.top(), 0);
                assert_eq!(pair.top.rect.height, pair.hole_top - 1);
                assert_eq!(pair.bottom.rect.bottom(), SCREEN_HEIGHT);
            }
        }
    }

    #[test]
    fn test_pair_starts_at_right_edge() {
        let mut rng = create_test_rng();
        let pair = ObstaclePair::generate(7, 250, &mut rng);
        assert_eq!(pair.top.rect.right(), SCREEN_WIDTH);
        assert_eq!(pair.bottom.rect.right(), SCREEN_WIDTH);
        assert_eq!(pair.top.rect.width, OBSTACLE_WIDTH);
        assert_eq!(pair.top.pair_id, 7);
        assert_eq!(pair.bottom.pair_id, 7);
        assert!(pair.top.primary);
        assert!(!pair.bottom.primary);
    }

    #[test]
    fn test_oversized_hole_is_clamped() {
        let mut rng = create_test_rng();
        let pair = ObstaclePair::generate(0, 10_000, &mut rng);
        assert_eq!(pair.hole_height, MAX_HOLE_HEIGHT);
        assert_eq!(pair.hole_top, MIN_HOLE_TOP);
        assert_eq!(pair.bottom.rect.height, HOLE_MARGIN);

        let pair = ObstaclePair::generate(1, -5, &mut rng);
        assert_eq!(pair.hole_height, HOLE_HEIGHT_FLOOR);
    }

    #[test]
    fn test_spawn_adds_tagged_pair() {
        let mut rng = create_test_rng();
        let mut field = ObstacleField::new();
        let first = field.spawn(&mut rng);
        let second = field.spawn(&mut rng);
        assert_eq!(field.len(), 4);
        assert_ne!(first.pair_id, second.pair_id);
        assert_eq!(field.obstacles.iter().filter(|o| o.primary).count(), 2);
        // Untimed spawns never shrink the hole
        assert_eq!(field.spawn_count, 0);
        assert_eq!(field.hole_height, HOLE_HEIGHT_START);
    }

    #[test]
    fn test_hole_shrinks_every_fifth_timed_spawn() {
        let mut rng = create_test_rng();
        let mut field = ObstacleField::new();
        for n in 1..=4 {
            field.spawn_timed(&mut rng);
            assert_eq!(field.spawn_count, n);
            assert_eq!(field.hole_height, 250);
        }
        let fifth = field.spawn_timed(&mut rng);
        // The fifth pair still uses the old hole
        assert_eq!(fifth.hole_height, 250);
        assert_eq!(field.hole_height, 240);
    }

    #[test]
    fn test_hole_never_below_floor() {
        let mut field = ObstacleField::new();
        let mut previous = field.hole_height;
        for n in 0..=200 {
            field.maybe_shrink(n);
            assert!(field.hole_height >= HOLE_HEIGHT_FLOOR);
            assert!(field.hole_height <= previous);
            previous = field.hole_height;
        }
        assert_eq!(field.hole_height, HOLE_HEIGHT_FLOOR);
    }

    #[test]
    fn test_maybe_shrink_ignores_zero() {
        let mut field = ObstacleField::new();
        field.maybe_shrink(0);
        assert_eq!(field.hole_height, HOLE_HEIGHT_START);
        field.maybe_shrink(10);
        assert_eq!(field.hole_height, HOLE_HEIGHT_START - 10);
    }

    #[test]
    fn test_tick_scrolls_left() {
        let mut rng = create_test_rng();
        let mut field = ObstacleField::new();
        field.spawn(&mut rng);
        let passed = field.tick();
        assert!(passed.is_empty());
        for obstacle in &field.obstacles {
            assert_eq!(obstacle.rect.right(), SCREEN_WIDTH - OBSTACLE_SPEED);
        }
    }

    #[test]
    fn test_tick_removes_offscreen_pillars() {
        let mut rng = create_test_rng();
        let mut field = ObstacleField::new();
        field.spawn(&mut rng);

        // Right edge starts at 1280 and must drop below 0: 129 ticks
        let mut ticks = 0;
        let mut passed = Vec::new();
        while passed.is_empty() {
            passed = field.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 129);
        assert_eq!(passed.len(), 2);
        assert!(field.is_empty());
        assert_eq!(passed.iter().filter(|e| e.primary).count(), 1);
    }

    #[test]
    fn test_pillar_at_zero_is_kept() {
        let mut field = ObstacleField::new();
        field.obstacles.push(Obstacle {
            rect: Rect::new(-OBSTACLE_WIDTH + OBSTACLE_SPEED, 0, OBSTACLE_WIDTH, 100),
            pair_id: 0,
            primary: true,
        });
        // Right edge lands exactly on 0
        assert!(field.tick().is_empty());
        assert_eq!(field.len(), 1);
        assert_eq!(field.tick().len(), 1);
    }
}
