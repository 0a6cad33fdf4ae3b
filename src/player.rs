//! The bird: gravity, jump impulse and screen clamping.

use crate::constants::{
    GRAVITY, JUMP_IMPULSE, PLAYER_HITBOX_MARGIN, PLAYER_SPRITE_HEIGHT, PLAYER_SPRITE_WIDTH,
    PLAYER_START_X, SCREEN_HEIGHT,
};
use crate::geometry::Rect;

#[derive(Debug, Clone)]
pub struct Player {
    /// Hitbox, also used as the draw position.
    pub rect: Rect,
    pub gravity: i32,
    /// Upward impulse in units/tick. Decays to `-gravity`.
    pub jump: i32,
}

impl Player {
    pub fn new() -> Self {
        let rect = Rect::new(0, 0, PLAYER_SPRITE_WIDTH, PLAYER_SPRITE_HEIGHT)
            .inflate(-PLAYER_HITBOX_MARGIN, -PLAYER_HITBOX_MARGIN);
        let mut player = Self {
            rect,
            gravity: GRAVITY,
            jump: 0,
        };
        player.start();
        player
    }

    /// Reset position and physics to the start of a round.
    pub fn start(&mut self) {
        self.gravity = GRAVITY;
        self.rect.set_midleft(PLAYER_START_X, SCREEN_HEIGHT / 2);
        self.jump = 0;
    }

    /// Advance one tick.
    ///
    /// Motion uses the impulse from before this tick's decay, so a jump
    /// requested this tick moves the bird up on the same tick.
    pub fn update(&mut self) {
        self.rect.move_by(0, self.gravity - self.jump);
        self.jump = (self.jump - 1).max(-self.gravity);

        if self.rect.bottom() >= SCREEN_HEIGHT {
            // Floor keeps the current impulse
            self.rect.set_bottom(SCREEN_HEIGHT);
        } else if self.rect.top() <= 0 {
            self.rect.set_top(1);
            self.jump = self.gravity;
        }
    }

    pub fn jump_request(&mut self) {
        self.jump = JUMP_IMPULSE;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
