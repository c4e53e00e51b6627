//! Rendering module
//!
//! The game state is turned into a list of [`DrawCommand`]s, which a
//! backend [`Canvas`] replays. Nothing here talks to a window.

pub mod canvas;
pub mod frame;
pub mod shapes;

pub use canvas::{Canvas, Color, DrawCommand, colors, present};
pub use frame::build_frame;
pub use shapes::{RoundedRectParts, rounded_rect_parts};
