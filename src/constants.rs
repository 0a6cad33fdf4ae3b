// Screen (world units)
pub const SCREEN_WIDTH: i32 = 1280;
pub const SCREEN_HEIGHT: i32 = 720;

// Game timing constants
pub const FPS: u32 = 60;
pub const SPAWN_INTERVAL_MS: u64 = 1000;

// Player constants
pub const PLAYER_START_X: i32 = 40;
pub const PLAYER_SPRITE_WIDTH: i32 = 68;
pub const PLAYER_SPRITE_HEIGHT: i32 = 48;
/// Hitbox shrink applied to the sprite bounds on each axis.
pub const PLAYER_HITBOX_MARGIN: i32 = 8;
pub const GRAVITY: i32 = 6;
pub const JUMP_IMPULSE: i32 = 23;

// Obstacle constants
pub const OBSTACLE_WIDTH: i32 = 80;
pub const OBSTACLE_SPEED: i32 = 10;
/// Minimum distance between the hole and the screen edges.
pub const HOLE_MARGIN: i32 = 20;
pub const HOLE_HEIGHT_START: i32 = 250;
pub const HOLE_HEIGHT_FLOOR: i32 = 150;
pub const HOLE_SHRINK_STEP: i32 = 10;
pub const HOLE_SHRINK_EVERY: u32 = 5;

// Menu layout
pub const TITLE_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 300);
pub const PLAY_BUTTON_CENTER: (i32, i32) = (SCREEN_WIDTH / 2, 400);
pub const PLAY_BUTTON_SIZE: (i32, i32) = (200, 60);
pub const HIGHSCORE_BOTTOMLEFT: (i32, i32) = (10, SCREEN_HEIGHT - 10);
pub const SCORE_TOPRIGHT: (i32, i32) = (SCREEN_WIDTH - 10, 10);

// Save system constants
pub const DATA_DIR_NAME: &str = ".flappy";
pub const HIGHSCORE_FILE_NAME: &str = "highscore";
pub const LOG_FILE_NAME: &str = "flappy.log";
