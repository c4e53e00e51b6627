//! Window configuration and icon loading

use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;
use image::imageops::FilterType;
use macroquad::miniquad::conf::{Conf, Icon};

use crate::config::GameConfig;
use crate::consts::WINDOW_TITLE;

/// Decode the icon file. A missing or unreadable icon is an error.
pub fn load_icon(path: impl AsRef<Path>) -> Result<Icon> {
    let path = path.as_ref();
    let image =
        image::open(path).with_context(|| format!("failed to load icon {}", path.display()))?;
    let icon = icon_from_image(&image)?;
    log::info!("Loaded window icon from {}", path.display());
    Ok(icon)
}

/// Resample an image into the three icon sizes the window system expects
pub fn icon_from_image(image: &DynamicImage) -> Result<Icon> {
    Ok(Icon {
        small: resized_rgba(image, 16)?,
        medium: resized_rgba(image, 32)?,
        big: resized_rgba(image, 64)?,
    })
}

fn resized_rgba<const N: usize>(image: &DynamicImage, side: u32) -> Result<[u8; N]> {
    let pixels = image
        .resize_exact(side, side, FilterType::Triangle)
        .to_rgba8()
        .into_raw();
    let len = pixels.len();
    pixels
        .try_into()
        .map_err(|_| anyhow::anyhow!("icon resample produced {} bytes, expected {}", len, N))
}

/// Fixed-size, non-resizable window sized from the game config
pub fn window_conf(config: &GameConfig, icon: Icon) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        icon: Some(icon),
        ..Default::default()
    }
}
