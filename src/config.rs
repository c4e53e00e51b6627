//! Game configuration
//!
//! Screen size, brick grid layout and entity dimensions. Defaults reproduce
//! the classic 800x700 board; a JSON file can override any subset of fields.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Brick wall layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    /// Gap between bricks and around the wall edges
    pub margin: f32,
    pub brick_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            columns: 7,
            margin: 15.0,
            brick_height: 20.0,
        }
    }
}

/// Ball dimensions and launch velocity (shared by both balls)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Units per frame
    pub start_velocity: Vec2,
    /// Start height as a divisor of screen height
    pub start_height_divisor: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            start_velocity: Vec2::new(5.0, -5.0),
            start_height_divisor: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Units per frame in key-control mode
    pub speed: i32,
    /// Distance from the paddle top to the bottom of the screen
    pub bottom_offset: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 20.0,
            speed: 18,
            bottom_offset: 30.0,
        }
    }
}

/// Full game configuration, passed to [`crate::sim::GameState::new`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Score at which the second ball joins
    pub threshold: u32,
    pub grid: GridConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 700.0,
            threshold: 5,
            grid: GridConfig::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
        }
    }
}

impl GameConfig {
    /// Screen bounds as a vector (width, height)
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Width of a single brick, derived so the wall spans the screen
    pub fn brick_width(&self) -> f32 {
        let columns = self.grid.columns as f32;
        (self.screen_width - (columns + 1.0) * self.grid.margin) / columns
    }

    /// Lowest y covered by the brick wall
    pub fn grid_bottom(&self) -> f32 {
        let rows = self.grid.rows as f32;
        self.grid.margin + rows * (self.grid.brick_height + self.grid.margin)
    }

    /// Where both balls start and return to on reset
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.screen_width / 2.0,
            self.screen_height / self.ball.start_height_divisor,
        )
    }

    /// Top-left corner of the paddle at game start
    pub fn paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.screen_width / 2.0 - self.paddle.width / 2.0,
            self.screen_height - self.paddle.bottom_offset,
        )
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject layouts the simulation cannot represent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::Invalid("screen dimensions must be positive"));
        }
        if self.grid.rows == 0 || self.grid.columns == 0 {
            return Err(ConfigError::Invalid("brick grid needs at least one row and column"));
        }
        if self.grid.margin < 0.0 || self.grid.brick_height <= 0.0 {
            return Err(ConfigError::Invalid("brick margin and height must be non-negative"));
        }
        if self.brick_width() <= 0.0 {
            return Err(ConfigError::Invalid("bricks do not fit across the screen"));
        }
        if self.ball.radius <= 0.0 || self.ball.start_height_divisor <= 1.0 {
            return Err(ConfigError::Invalid(
                "ball radius must be positive and start inside the screen",
            ));
        }
        if self.paddle.width <= 0.0 || self.paddle.width > self.screen_width {
            return Err(ConfigError::Invalid("paddle must fit on screen"));
        }
        if self.paddle.height <= 0.0 || self.paddle.speed < 0 {
            return Err(ConfigError::Invalid("paddle height and speed must be positive"));
        }
        if self.grid_bottom() >= self.paddle_start().y {
            return Err(ConfigError::Invalid("brick wall overlaps the paddle row"));
        }
        Ok(())
    }
}

/// Errors from loading a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read config {path}: {source}"),
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_classic_board() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        // (800 - 8 * 15) / 7
        assert!((config.brick_width() - 680.0 / 7.0).abs() < 1e-4);
        assert_eq!(config.ball_start(), Vec2::new(400.0, 700.0 / 1.5));
        assert_eq!(config.paddle_start(), Vec2::new(320.0, 670.0));
        assert_eq!(config.grid_bottom(), 330.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json_str(r#"{ "screen_width": 1000, "grid": { "rows": 4 } }"#)
                .unwrap();
        assert_eq!(config.screen_width, 1000.0);
        assert_eq!(config.screen_height, 700.0);
        assert_eq!(config.grid.rows, 4);
        assert_eq!(config.grid.columns, 7);
        assert_eq!(config.threshold, 5);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ screen_width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_rejects_bad_layouts() {
        let mut config = GameConfig::default();
        config.grid.columns = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.paddle.width = 900.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.grid.rows = 30;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/nonexistent/brick-game.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/brick-game.json"));
    }
}
