//! Brick Game - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (movement, collisions, game state)
//! - `renderer`: Backend-independent draw commands built from the game state
//! - `platform`: macroquad window, input and canvas
//! - `config`: Screen size and layout configuration

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Fixed constants that are not part of [`GameConfig`]
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Brick Game";
    /// Window icon, relative to the working directory
    pub const ICON_PATH: &str = "./images/bricks.png";
    /// Environment variable naming an optional JSON config file
    pub const CONFIG_ENV_VAR: &str = "BRICK_GAME_CONFIG";

    /// Rendered frames per second the game speeds are tuned for (vsync paced)
    pub const TARGET_FPS: u32 = 60;
    /// Expected duration of one frame
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Frames longer than this multiple of [`FRAME_DT`] are logged
    pub const SLOW_FRAME_FACTOR: f32 = 2.0;

    /// Paddle hit offset (-1..1) to deflection angle scale
    pub const DEFLECTION_SCALE: f32 = 0.25;
    /// Deflection clamp (radians)
    pub const MAX_DEFLECTION: f32 = 0.4;
    /// Deflection angle to horizontal speed multiplier
    pub const DEFLECTION_SPEED_FACTOR: f32 = 10.0;

    /// Paddle corner roundness (0 = square, 1 = fully rounded ends)
    pub const PADDLE_ROUNDNESS: f32 = 0.8;

    pub const GAME_OVER_MESSAGE: &str = "Game Over! Press Enter to exit the game";
    pub const GAME_OVER_TEXT_X: f32 = 80.0;
    /// Offset above the vertical screen center
    pub const GAME_OVER_TEXT_RISE: f32 = 50.0;
    pub const GAME_OVER_TEXT_SIZE: f32 = 30.0;
}
