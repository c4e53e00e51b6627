//! Live keyboard and mouse state from macroquad

use macroquad::input::{KeyCode, is_key_down, is_key_pressed, mouse_position};

use crate::sim::{InputSource, Key};

/// Reads the current frame's device state. Only valid inside the macroquad
/// frame loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroquadInput;

/// Physical keys bound to each game key
pub fn key_codes(key: Key) -> &'static [KeyCode] {
    match key {
        Key::Left => &[KeyCode::Left],
        Key::Right => &[KeyCode::Right],
        Key::Quit => &[KeyCode::Enter, KeyCode::Escape],
        Key::Restart => &[KeyCode::R],
        Key::ToggleControl => &[KeyCode::M],
    }
}

impl InputSource for MacroquadInput {
    fn pointer_x(&self) -> f32 {
        mouse_position().0
    }

    fn is_key_down(&self, key: Key) -> bool {
        key_codes(key).iter().any(|&code| is_key_down(code))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        key_codes(key).iter().any(|&code| is_key_pressed(code))
    }
}
