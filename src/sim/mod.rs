//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One step per frame, no time delta
//! - Input arrives through [`InputSource`], never from a device directly
//! - Stable brick iteration order (row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, paddle_deflection, resolve_ball};
pub use geometry::{Rect, circle_rect_intersects};
pub use input::{InputSource, Key, KeySet, TickInput};
pub use state::{Ball, BallSlot, Brick, BrickGrid, GamePhase, GameState, Paddle};
pub use tick::{TickOutcome, tick};
