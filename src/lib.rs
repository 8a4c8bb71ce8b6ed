//! Infinite Runner - side-scrolling obstacle jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, lifecycle)
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-process session high score
//! - `hud`: Presentation-side helpers (throttled score feed)
//! - `web`: WebAssembly binding for the browser renderer

pub mod highscores;
pub mod hud;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Visible field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Ground baseline (screen y grows downward)
    pub const GROUND_Y: f32 = 300.0;

    /// Player box - fixed horizontal position
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Jump velocity (negative = up)
    pub const JUMP_IMPULSE: f32 = -15.0;

    /// Scroll speed at run start (pixels per tick)
    pub const BASE_SPEED: f32 = 5.0;
    /// Score needed per +1 speed step
    pub const SCORE_PER_SPEED_STEP: u64 = 500;

    /// Spawn cadence: max(MIN, BASE - floor(speed * PER_SPEED)) ticks
    pub const BASE_SPAWN_INTERVAL: u64 = 120;
    pub const SPAWN_INTERVAL_PER_SPEED: f32 = 5.0;
    pub const MIN_SPAWN_INTERVAL: u64 = 60;

    /// Obstacle size ranges, half-open [min, max)
    pub const OBSTACLE_MIN_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 40.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 70.0;

    /// HUD score refresh cadence (ticks)
    pub const SCORE_PUBLISH_INTERVAL: u64 = 5;
}
