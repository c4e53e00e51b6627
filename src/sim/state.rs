//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here. [`GameState`] exclusively
//! owns the brick wall, both balls and the paddle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionReport, resolve_ball};
use super::geometry::Rect;
use super::input::{InputSource, Key};
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick is gone; waiting for restart or quit
    GameOver,
}

/// A destructible brick. Inactive bricks are neither drawn nor collidable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

impl Brick {
    pub fn new(rect: Rect) -> Self {
        Self { rect, active: true }
    }
}

/// Fixed rows x columns wall of bricks, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a fresh wall with every brick active
    pub fn layout(config: &GameConfig) -> Self {
        let grid = &config.grid;
        let width = config.brick_width();
        let mut bricks = Vec::with_capacity(grid.rows * grid.columns);

        for row in 0..grid.rows {
            for column in 0..grid.columns {
                bricks.push(Brick::new(Rect::new(
                    grid.margin + column as f32 * (width + grid.margin),
                    grid.margin + row as f32 * (grid.brick_height + grid.margin),
                    width,
                    grid.brick_height,
                )));
            }
        }

        Self {
            rows: grid.rows,
            columns: grid.columns,
            bricks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        if row < self.rows && column < self.columns {
            self.bricks.get(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Brick> {
        if row < self.rows && column < self.columns {
            self.bricks.get_mut(row * self.columns + column)
        } else {
            None
        }
    }

    /// All bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// True once every brick has been knocked out
    pub fn all_cleared(&self) -> bool {
        !self.bricks.iter().any(|b| b.active)
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Units per frame
    pub velocity: Vec2,
    pub radius: f32,
    pub visible: bool,
    initial_position: Vec2,
    initial_velocity: Vec2,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, visible: bool) -> Self {
        Self {
            position,
            velocity,
            radius,
            visible,
            initial_position: position,
            initial_velocity: velocity,
        }
    }

    pub fn initial_position(&self) -> Vec2 {
        self.initial_position
    }

    pub fn initial_velocity(&self) -> Vec2 {
        self.initial_velocity
    }

    /// Advance one frame
    #[inline]
    pub fn move_step(&mut self) {
        self.position += self.velocity;
    }

    /// Return to the launch position and velocity. Radius and visibility
    /// are untouched.
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.velocity = self.initial_velocity;
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.radius
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Units per frame in key-control mode
    pub speed: i32,
    /// Follow the pointer instead of the arrow keys
    pub use_mouse_control: bool,
}

impl Paddle {
    pub fn new(rect: Rect, speed: i32) -> Self {
        Self {
            rect,
            speed,
            use_mouse_control: true,
        }
    }

    pub fn toggle_control(&mut self) {
        self.use_mouse_control = !self.use_mouse_control;
    }

    /// Move from the current input, then clamp inside `[0, screen_width]`.
    ///
    /// In key mode left and right apply independently, so holding both
    /// leaves the paddle where it was.
    pub fn move_with(&mut self, input: &impl InputSource, screen_width: f32) {
        if self.use_mouse_control {
            self.rect.x = input.pointer_x() - self.rect.width / 2.0;
        } else {
            if input.is_key_down(Key::Left) {
                self.rect.x -= self.speed as f32;
            }
            if input.is_key_down(Key::Right) {
                self.rect.x += self.speed as f32;
            }
        }
        self.clamp(screen_width);
    }

    fn clamp(&mut self, screen_width: f32) {
        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.x + self.rect.width > screen_width {
            self.rect.x = screen_width - self.rect.width;
        }
    }
}

/// Which of the two balls an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallSlot {
    /// Always in play
    Primary,
    /// Joins once the score reaches the threshold
    Secondary,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub bricks: BrickGrid,
    pub primary_ball: Ball,
    pub secondary_ball: Ball,
    pub paddle: Paddle,
    pub score: u32,
    /// Score at which the secondary ball joins
    pub threshold: u32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let ball_start = config.ball_start();
        let ball = &config.ball;
        let paddle_start = config.paddle_start();

        Self {
            bricks: BrickGrid::layout(&config),
            primary_ball: Ball::new(ball_start, ball.start_velocity, ball.radius, true),
            secondary_ball: Ball::new(ball_start, ball.start_velocity, ball.radius, false),
            paddle: Paddle::new(
                Rect::new(
                    paddle_start.x,
                    paddle_start.y,
                    config.paddle.width,
                    config.paddle.height,
                ),
                config.paddle.speed,
            ),
            score: 0,
            threshold: config.threshold,
            phase: GamePhase::Playing,
            config,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score has reached the threshold for the second ball
    pub fn secondary_unlocked(&self) -> bool {
        self.score >= self.threshold
    }

    /// Resolve one ball against walls, bricks and paddle, bank the score and
    /// re-derive game over.
    ///
    /// Runs once per active ball per frame, so with two balls the brick
    /// exhaustion check can flip the phase between the first and second call.
    pub fn resolve_collisions(&mut self, slot: BallSlot) -> CollisionReport {
        let screen = self.config.screen_size();
        let ball = match slot {
            BallSlot::Primary => &mut self.primary_ball,
            BallSlot::Secondary => &mut self.secondary_ball,
        };
        let report = resolve_ball(ball, &mut self.bricks, &self.paddle.rect, screen);
        self.score += report.bricks_destroyed;

        if self.bricks.all_cleared() && self.phase != GamePhase::GameOver {
            log::info!("All bricks cleared, game over (score {})", self.score);
            self.phase = GamePhase::GameOver;
        }

        report
    }

    /// Start a fresh round: new wall, zero score, both balls back at the
    /// start, secondary ball hidden again.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.primary_ball.reset();
        self.secondary_ball.reset();
        self.secondary_ball.visible = false;
        self.bricks = BrickGrid::layout(&self.config);
        log::info!("Restarted with {} bricks", self.bricks.len());
    }
}
