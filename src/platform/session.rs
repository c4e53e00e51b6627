//! Driver between the frame loop and the simulation
//!
//! Every rendered frame is one input poll, one [`tick`] and one render. The
//! display's vsync paces the loop at about
//! [`TARGET_FPS`](crate::consts::TARGET_FPS); frame time is only used to
//! report frames that fall well behind it.

use crate::config::GameConfig;
use crate::consts::{FRAME_DT, SLOW_FRAME_FACTOR};
use crate::sim::{GameState, TickInput, TickOutcome, tick};

/// Owns the game state and counts simulated frames
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    ticks: u64,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            ticks: 0,
        }
    }

    /// Frames simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed one rendered frame: its input snapshot and elapsed seconds.
    /// Always advances the game by exactly one tick.
    pub fn frame(&mut self, input: TickInput, dt: f32) -> TickOutcome {
        if dt > FRAME_DT * SLOW_FRAME_FACTOR {
            log::debug!(
                "Slow frame: {:.1} ms (target {:.1} ms)",
                dt * 1000.0,
                FRAME_DT * 1000.0
            );
        }

        self.ticks += 1;
        tick(&mut self.state, &input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Key;
    use glam::Vec2;

    fn idle() -> TickInput {
        TickInput::default().with_pointer(400.0)
    }

    /// Board large enough that the ball never reaches an edge
    fn open_board() -> GameConfig {
        let mut config = GameConfig::default();
        config.screen_width = 100_000.0;
        config.screen_height = 100_000.0;
        config
    }

    #[test]
    fn test_jittered_frames_tick_once_each() {
        let mut session = Session::new(open_board());
        let mut last = session.state.primary_ball.position;

        for frame in 0..600 {
            let dt = if frame % 2 == 0 {
                FRAME_DT * 0.97
            } else {
                FRAME_DT * 1.03
            };
            session.frame(idle(), dt);

            let position = session.state.primary_ball.position;
            assert_eq!(position - last, Vec2::new(5.0, -5.0), "frame {frame}");
            last = position;
        }
        assert_eq!(session.ticks(), 600);
    }

    #[test]
    fn test_short_and_long_frames_tick_once() {
        let mut session = Session::new(open_board());
        let start = session.state.primary_ball.position;

        session.frame(idle(), FRAME_DT * 0.5);
        session.frame(idle(), 0.25);

        assert_eq!(session.ticks(), 2);
        assert_eq!(session.state.primary_ball.position, start + Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_press_applies_to_its_own_frame() {
        let mut session = Session::new(GameConfig::default());

        session.frame(idle().pressing(Key::ToggleControl), FRAME_DT * 0.98);
        assert!(!session.state.paddle.use_mouse_control);
        session.frame(idle(), FRAME_DT);
        assert!(!session.state.paddle.use_mouse_control);
    }

    #[test]
    fn test_quit_stops_frame() {
        let mut session = Session::new(GameConfig::default());
        let outcome = session.frame(idle().pressing(Key::Quit), FRAME_DT);
        assert_eq!(outcome, TickOutcome::Quit);
    }
}
