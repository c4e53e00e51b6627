//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. There is no time delta: ball and
//! paddle speeds are expressed in units per frame, and the platform loop is
//! responsible for calling [`tick`] at a fixed rate.

use super::collision::CollisionReport;
use super::input::{InputSource, Key};
use super::state::{BallSlot, GamePhase, GameState};

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Quit was requested; stop the loop
    Quit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &impl InputSource) -> TickOutcome {
    if input.is_key_pressed(Key::Quit) {
        log::info!("Quit requested (score {})", state.score);
        return TickOutcome::Quit;
    }

    if state.phase == GamePhase::Playing {
        update(state, input);
    }

    // Restart also runs a first update in the same frame
    if state.phase == GamePhase::GameOver && input.is_key_pressed(Key::Restart) {
        state.restart();
        update(state, input);
    }

    TickOutcome::Continue
}

/// One frame of play: control toggle, balls, then paddle
fn update(state: &mut GameState, input: &impl InputSource) {
    if input.is_key_pressed(Key::ToggleControl) {
        state.paddle.toggle_control();
        log::info!(
            "Paddle control: {}",
            if state.paddle.use_mouse_control {
                "pointer"
            } else {
                "keys"
            }
        );
    }

    state.primary_ball.move_step();
    let report = state.resolve_collisions(BallSlot::Primary);
    log_report(BallSlot::Primary, &report);

    // Once unlocked the secondary ball stays in play for the rest of the round
    if state.secondary_unlocked() {
        if !state.secondary_ball.visible {
            log::info!("Score {} reached, releasing second ball", state.score);
            state.secondary_ball.visible = true;
        }
        state.secondary_ball.move_step();
        let report = state.resolve_collisions(BallSlot::Secondary);
        log_report(BallSlot::Secondary, &report);
    }

    let screen_width = state.config.screen_width;
    state.paddle.move_with(input, screen_width);
}

fn log_report(slot: BallSlot, report: &CollisionReport) {
    if report.wall_bounce {
        log::debug!("{slot:?} ball: wall bounce");
    }
    if report.ceiling_bounce {
        log::debug!("{slot:?} ball: ceiling bounce");
    }
    if report.floor_reset {
        log::debug!("{slot:?} ball: fell past the floor, reset");
    }
    if report.bricks_destroyed > 0 {
        log::debug!("{slot:?} ball: {} brick(s) destroyed", report.bricks_destroyed);
    }
    if report.paddle_hit {
        log::debug!("{slot:?} ball: paddle hit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::input::TickInput;
    use glam::Vec2;

    fn idle() -> TickInput {
        TickInput::default().with_pointer(400.0)
    }

    fn clear_all_bricks(state: &mut GameState) {
        for brick in state.bricks.iter_mut() {
            brick.active = false;
        }
    }

    #[test]
    fn test_tick_moves_primary_ball() {
        let mut state = GameState::new(GameConfig::default());
        let start = state.primary_ball.position;

        assert_eq!(tick(&mut state, &idle()), TickOutcome::Continue);

        assert_eq!(state.primary_ball.position, start + Vec2::new(5.0, -5.0));
        // Secondary ball is parked until the threshold
        assert_eq!(state.secondary_ball.position, start);
        assert!(!state.secondary_ball.visible);
    }

    #[test]
    fn test_tick_wall_scenario() {
        let mut state = GameState::new(GameConfig::default());
        state.primary_ball.position = Vec2::new(10.0, 300.0);
        state.primary_ball.velocity = Vec2::new(-5.0, 3.0);

        tick(&mut state, &idle());

        assert_eq!(state.primary_ball.position.x, 5.0);
        assert_eq!(state.primary_ball.velocity.x, 5.0);
    }

    #[test]
    fn test_collision_events_reported_per_ball() {
        let mut state = GameState::new(GameConfig::default());
        state.primary_ball.position = Vec2::new(3.0, 400.0);
        state.primary_ball.velocity = Vec2::new(-5.0, 3.0);
        let report = state.resolve_collisions(BallSlot::Primary);
        assert!(report.wall_bounce);
        assert!(!report.floor_reset);

        state.secondary_ball.position = Vec2::new(400.0, 700.0);
        let report = state.resolve_collisions(BallSlot::Secondary);
        assert!(report.floor_reset);
        assert_eq!(state.secondary_ball.position, state.config.ball_start());
        // The primary ball is untouched by a secondary pass
        assert_eq!(state.primary_ball.position, Vec2::new(3.0, 400.0));
    }

    #[test]
    fn test_secondary_ball_clears_last_brick() {
        let mut state = GameState::new(GameConfig::default());
        state.score = 10;
        clear_all_bricks(&mut state);
        let last = state.bricks.get_mut(8, 5).unwrap();
        last.active = true;
        let target = last.rect;

        // Secondary ball rises straight into the last brick; the primary
        // ball starts far below the wall and cannot reach it this frame
        state.secondary_ball.visible = true;
        state.secondary_ball.position = Vec2::new(
            target.x + target.width / 2.0,
            target.y + target.height + 20.0,
        );
        state.secondary_ball.velocity = Vec2::new(0.0, -5.0);

        tick(&mut state, &idle());

        assert!(!state.bricks.get(8, 5).unwrap().active);
        assert_eq!(state.score, 11);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_secondary_ball_released_at_threshold() {
        let mut state = GameState::new(GameConfig::default());
        state.score = 4;
        tick(&mut state, &idle());
        assert!(!state.secondary_ball.visible);

        state.score = 5;
        let start = state.secondary_ball.position;
        tick(&mut state, &idle());
        assert!(state.secondary_ball.visible);
        assert_ne!(state.secondary_ball.position, start);

        // Visibility never reverts within the round
        state.score = 4;
        tick(&mut state, &idle());
        assert!(state.secondary_ball.visible);
    }

    #[test]
    fn test_toggle_control_and_key_movement() {
        let mut state = GameState::new(GameConfig::default());
        assert!(state.paddle.use_mouse_control);

        tick(&mut state, &idle().pressing(Key::ToggleControl));
        assert!(!state.paddle.use_mouse_control);

        let x = state.paddle.rect.x;
        tick(&mut state, &idle().holding(Key::Right));
        assert_eq!(state.paddle.rect.x, x + 18.0);

        tick(&mut state, &idle().pressing(Key::ToggleControl));
        assert!(state.paddle.use_mouse_control);
        tick(&mut state, &TickInput::default().with_pointer(100.0));
        assert_eq!(state.paddle.rect.x, 20.0);
    }

    #[test]
    fn test_all_bricks_inactive_ends_game() {
        let mut state = GameState::new(GameConfig::default());
        clear_all_bricks(&mut state);

        tick(&mut state, &idle());
        assert!(state.is_game_over());

        // Frozen while game over
        let ball = state.primary_ball.position;
        tick(&mut state, &idle());
        assert_eq!(state.primary_ball.position, ball);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = GameState::new(GameConfig::default());
        clear_all_bricks(&mut state);
        state.score = 63;
        state.secondary_ball.visible = true;
        tick(&mut state, &idle());
        assert!(state.is_game_over());

        tick(&mut state, &idle().pressing(Key::Restart));

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.active_count(), 63);
        assert!(!state.secondary_ball.visible);
        // The restart frame already advanced the primary ball once
        assert_eq!(
            state.primary_ball.position,
            state.config.ball_start() + Vec2::new(5.0, -5.0)
        );
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(GameConfig::default());
        state.score = 3;
        state.bricks.get_mut(0, 0).unwrap().active = false;

        tick(&mut state, &idle().pressing(Key::Restart));

        assert_eq!(state.score, 3);
        assert_eq!(state.bricks.active_count(), 62);
    }

    #[test]
    fn test_quit_from_either_phase() {
        let mut state = GameState::new(GameConfig::default());
        let quit = idle().pressing(Key::Quit);
        assert_eq!(tick(&mut state, &quit), TickOutcome::Quit);

        clear_all_bricks(&mut state);
        tick(&mut state, &idle());
        assert!(state.is_game_over());
        assert_eq!(tick(&mut state, &quit), TickOutcome::Quit);
    }

    #[test]
    fn test_determinism() {
        // Two states fed the same inputs end identical
        let mut state1 = GameState::new(GameConfig::default());
        let mut state2 = GameState::new(GameConfig::default());

        let inputs = [
            idle(),
            TickInput::default().with_pointer(150.0),
            idle().pressing(Key::ToggleControl),
            idle().holding(Key::Left),
            idle().holding(Key::Right),
        ];

        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
    }
}
