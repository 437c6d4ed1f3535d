// Frame pacing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS

// Logical drawing surface (world pixels)
pub const SCREEN_WIDTH: f64 = 320.0;
pub const SCREEN_HEIGHT: f64 = 480.0;
pub const SKY_COLOR: (u8, u8, u8) = (0x70, 0xc5, 0xce);

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const GRAVITY: f64 = 0.1;
pub const JUMP: f64 = 4.0;
pub const POSE_UP_DEGREES: f64 = -25.0;
pub const POSE_DOWN_DEGREES: f64 = 90.0;

// Pipes
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_MAX_Y_POS: f64 = -150.0;
pub const PIPE_DX: f64 = 2.0;
pub const PIPE_SPAWN_INTERVAL: u64 = 150;

// Ground strip
pub const GROUND_HEIGHT: f64 = 40.0;
pub const FOREGROUND_DX: f64 = 1.5;

// Score overlay
pub const SCORE_DIGITS_Y: f64 = 50.0;
pub const SCOREBOARD_MARGIN: f64 = 10.0;

// Persistence
pub const BEST_SCORE_KEY: &str = "bestScore";
pub const STORAGE_FILE: &str = "storage.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
pub const ASSET_DIR: &str = "sprites";
