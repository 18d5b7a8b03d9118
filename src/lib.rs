//! Cubefall - dodge the falling cubes, survive as long as you can
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, game state)
//! - `render`: Terminal rendering of the platform and cubes
//! - `app`: Host loop wiring input, sim ticks, and rendering together
//! - `highscores`: Persistent best survival time
//! - `settings`: User preferences

pub mod app;
pub mod highscores;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep, in milliseconds (~33 Hz)
    pub const TICK_MS: u64 = 30;

    /// Half-width of the square platform; the player loses a life past this
    pub const PLATFORM_LIMIT: f32 = 4.5;
    /// Distance the player moves per input step
    pub const MOVE_STEP: f32 = 0.4;
    /// Lives at the start of a session
    pub const START_LIVES: u8 = 3;

    /// Obstacles spawn with x,z drawn uniformly from this half-range
    pub const SPAWN_RANGE: f32 = 4.0;
    /// Height above the platform at which obstacles spawn
    pub const SPAWN_HEIGHT: f32 = 6.0;
    /// Obstacles below this height are gone for good and get pruned
    pub const FLOOR_Y: f32 = -0.5;

    /// Horizontal half-extent of the player/obstacle overlap test
    pub const HIT_RANGE: f32 = 0.7;
    /// An obstacle only counts as a hit once it has fallen to this height
    pub const HIT_HEIGHT: f32 = 0.5;

    /// Fall speed per tick at difficulty 1.0
    pub const BASE_FALL_SPEED: f32 = 0.07;
    /// Spawn probability per tick at difficulty 1.0
    pub const BASE_SPAWN_RATE: f32 = 0.01;
    /// Spawn probability never exceeds this
    pub const MAX_SPAWN_RATE: f32 = 0.15;
    /// Difficulty increment applied at each ramp step
    pub const DIFFICULTY_STEP: f32 = 0.01;
    /// Difficulty ramps when the elapsed-seconds counter crosses a multiple of this
    pub const RAMP_INTERVAL_SECS: u64 = 10;

    /// Camera rotation per key press, in degrees
    pub const CAMERA_STEP_DEG: f32 = 5.0;
    /// Initial camera angle, in degrees
    pub const CAMERA_START_DEG: f32 = 45.0;
}
