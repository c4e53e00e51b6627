//! Platform layer
//!
//! Everything that touches a real window or device:
//! - Window configuration and icon
//! - Live input (macroquad keyboard/mouse)
//! - Canvas that replays draw commands
//! - Session driving one simulation tick per frame

pub mod canvas;
pub mod input;
pub mod session;
pub mod window;

pub use canvas::MacroquadCanvas;
pub use input::{MacroquadInput, key_codes};
pub use session::Session;
pub use window::{icon_from_image, load_icon, window_conf};
