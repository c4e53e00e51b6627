//! Frame construction from game state

use glam::Vec2;

use super::canvas::{DrawCommand, colors};
use crate::consts::{
    GAME_OVER_MESSAGE, GAME_OVER_TEXT_RISE, GAME_OVER_TEXT_SIZE, GAME_OVER_TEXT_X,
    PADDLE_ROUNDNESS,
};
use crate::sim::{Ball, GameState};

/// Build the draw list for the current frame
///
/// While playing: background, active bricks, the primary ball, the secondary
/// ball once released, then the paddle. After game over only the background
/// and the end-of-game message are drawn.
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let mut frame = Vec::with_capacity(state.bricks.len() + 4);
    frame.push(DrawCommand::Clear(colors::BACKGROUND));

    if state.is_game_over() {
        frame.push(DrawCommand::Text {
            text: GAME_OVER_MESSAGE.to_string(),
            position: Vec2::new(
                GAME_OVER_TEXT_X,
                state.config.screen_height / 2.0 - GAME_OVER_TEXT_RISE,
            ),
            size: GAME_OVER_TEXT_SIZE,
            color: colors::MESSAGE,
        });
        return frame;
    }

    frame.extend(
        state
            .bricks
            .iter()
            .filter(|b| b.active)
            .map(|b| DrawCommand::Rect {
                rect: b.rect,
                color: colors::BRICK,
            }),
    );

    frame.push(ball_disc(&state.primary_ball));
    if state.secondary_unlocked() && state.secondary_ball.visible {
        frame.push(ball_disc(&state.secondary_ball));
    }

    frame.push(DrawCommand::RoundedRect {
        rect: state.paddle.rect,
        roundness: PADDLE_ROUNDNESS,
        color: colors::PADDLE,
    });

    frame
}

/// Ball drawn at its integer pixel position
fn ball_disc(ball: &Ball) -> DrawCommand {
    DrawCommand::Circle {
        center: ball.position.trunc(),
        radius: ball.radius,
        color: colors::BALL,
    }
}
