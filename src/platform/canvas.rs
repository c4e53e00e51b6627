//! Canvas backed by macroquad's immediate-mode drawing

use glam::Vec2;
use macroquad::color::Color as MqColor;
use macroquad::shapes::{draw_circle, draw_rectangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;

use crate::renderer::{Canvas, Color, rounded_rect_parts};
use crate::sim::Rect;

#[derive(Debug, Clone, Copy, Default)]
pub struct MacroquadCanvas;

fn to_mq(color: Color) -> MqColor {
    MqColor::from_rgba(color[0], color[1], color[2], color[3])
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(to_mq(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, to_mq(color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, roundness: f32, color: Color) {
        let parts = rounded_rect_parts(rect, roundness);
        self.fill_rect(parts.horizontal, color);
        self.fill_rect(parts.vertical, color);
        for corner in parts.corners {
            self.fill_circle(corner, parts.corner_radius, color);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        draw_circle(center.x, center.y, radius, to_mq(color));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        // macroquad anchors text at the baseline
        let font_size = size.round() as u16;
        let dims = measure_text(text, None, font_size, 1.0);
        draw_text(text, position.x, position.y + dims.offset_y, size, to_mq(color));
    }
}
