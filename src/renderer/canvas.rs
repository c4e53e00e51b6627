//! Draw commands and the canvas they are replayed onto

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// RGBA color, 8 bits per channel
pub type Color = [u8; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [170, 204, 249, 255]; // Light blue
    pub const BRICK: Color = [255, 255, 255, 255];
    pub const BALL: Color = [255, 255, 255, 255];
    pub const PADDLE: Color = [255, 255, 255, 255];
    pub const MESSAGE: Color = [0, 0, 0, 255];
}

/// A backend-independent draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
    },
    RoundedRect {
        rect: Rect,
        /// 0 = square corners, 1 = corner radius of half the short side
        roundness: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// `position` is the top-left corner of the text box
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Color,
    },
}

/// Drawing surface implemented by a rendering backend
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_rounded_rect(&mut self, rect: Rect, roundness: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
}

impl DrawCommand {
    pub fn apply(&self, canvas: &mut impl Canvas) {
        match self {
            DrawCommand::Clear(color) => canvas.clear(*color),
            DrawCommand::Rect { rect, color } => canvas.fill_rect(*rect, *color),
            DrawCommand::RoundedRect {
                rect,
                roundness,
                color,
            } => canvas.fill_rounded_rect(*rect, *roundness, *color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => canvas.fill_circle(*center, *radius, *color),
            DrawCommand::Text {
                text,
                position,
                size,
                color,
            } => canvas.draw_text(text, *position, *size, *color),
        }
    }
}

/// Replay a frame onto a canvas, in order
pub fn present(frame: &[DrawCommand], canvas: &mut impl Canvas) {
    for command in frame {
        command.apply(canvas);
    }
}
