//! Brick Game entry point
//!
//! Loads config and icon, opens the window and runs the frame loop.

use anyhow::{Context, Result};
use macroquad::input::{is_quit_requested, prevent_quit};
use macroquad::time::get_frame_time;
use macroquad::window::next_frame;

use brick_game::consts::{CONFIG_ENV_VAR, ICON_PATH};
use brick_game::platform::{MacroquadCanvas, MacroquadInput, Session, load_icon, window_conf};
use brick_game::renderer::{build_frame, present};
use brick_game::sim::{TickInput, TickOutcome};
use brick_game::GameConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = load_config()?;
    let icon = load_icon(ICON_PATH).context("window icon is required")?;

    log::info!(
        "Brick Game starting ({}x{}, {}x{} bricks)",
        config.screen_width,
        config.screen_height,
        config.grid.rows,
        config.grid.columns
    );
    macroquad::Window::from_config(window_conf(&config, icon), game_loop(config));
    Ok(())
}

/// Defaults unless the environment names a config file
fn load_config() -> Result<GameConfig> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("{CONFIG_ENV_VAR}={}", path.to_string_lossy())),
        None => Ok(GameConfig::default()),
    }
}

async fn game_loop(config: GameConfig) {
    prevent_quit();
    let mut session = Session::new(config);
    let mut canvas = MacroquadCanvas;

    loop {
        if is_quit_requested() {
            log::info!("Window closed");
            break;
        }

        let input = TickInput::capture(&MacroquadInput);
        if session.frame(input, get_frame_time()) == TickOutcome::Quit {
            break;
        }

        present(&build_frame(&session.state), &mut canvas);
        next_frame().await;
    }

    log::info!(
        "Final score: {} after {} frames",
        session.state.score,
        session.ticks()
    );
}
