//! Input capabilities consumed by the simulation
//!
//! The simulation never polls a device directly. Callers hand it an
//! [`InputSource`]: the platform layer for live play, or a recorded
//! [`TickInput`] for tests and replays.

use serde::{Deserialize, Serialize};

/// Named keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Exit the game (Enter or Escape)
    Quit,
    /// Start over after game over (R)
    Restart,
    /// Switch paddle between pointer and key control (M)
    ToggleControl,
}

impl Key {
    pub const ALL: [Key; 5] = [
        Key::Left,
        Key::Right,
        Key::Quit,
        Key::Restart,
        Key::ToggleControl,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Current pointer position and key state
pub trait InputSource {
    /// Horizontal pointer position in screen units
    fn pointer_x(&self) -> f32;
    /// Key is held this frame
    fn is_key_down(&self, key: Key) -> bool;
    /// Key went down this frame (one-shot)
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Small set of [`Key`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeySet(u8);

impl KeySet {
    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub pointer_x: f32,
    pub held: KeySet,
    pub pressed: KeySet,
}

impl TickInput {
    /// Snapshot every key of a live source
    pub fn capture(source: &impl InputSource) -> Self {
        let mut input = Self {
            pointer_x: source.pointer_x(),
            ..Default::default()
        };
        for key in Key::ALL {
            if source.is_key_down(key) {
                input.held.insert(key);
            }
            if source.is_key_pressed(key) {
                input.pressed.insert(key);
            }
        }
        input
    }

    pub fn with_pointer(mut self, x: f32) -> Self {
        self.pointer_x = x;
        self
    }

    pub fn holding(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn pressing(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self
    }
}

impl InputSource for TickInput {
    fn pointer_x(&self) -> f32 {
        self.pointer_x
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(key)
    }
}
