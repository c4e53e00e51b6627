//! Collision detection and response for one ball
//!
//! Checks run in a fixed order and later checks see velocity already
//! flipped by earlier ones: side walls, ceiling, floor, bricks, paddle.

use glam::Vec2;

use super::geometry::{Rect, circle_rect_intersects};
use super::state::{Ball, BrickGrid};
use crate::consts::{DEFLECTION_SCALE, DEFLECTION_SPEED_FACTOR, MAX_DEFLECTION};

/// What a single collision pass did to the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Horizontal velocity flipped on a side wall
    pub wall_bounce: bool,
    /// Vertical velocity flipped on the ceiling
    pub ceiling_bounce: bool,
    /// Ball fell past the bottom edge and was reset
    pub floor_reset: bool,
    /// Number of bricks knocked out this pass
    pub bricks_destroyed: u32,
    pub paddle_hit: bool,
}

/// Run every collision check for `ball` against the screen edges, the brick
/// wall and the paddle
///
/// No position correction is applied anywhere: a ball may overlap a wall
/// for a frame until its reversed velocity carries it back.
pub fn resolve_ball(
    ball: &mut Ball,
    bricks: &mut BrickGrid,
    paddle: &Rect,
    screen: Vec2,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    // Side walls
    if ball.right() >= screen.x || ball.left() <= 0.0 {
        ball.velocity.x = -ball.velocity.x;
        report.wall_bounce = true;
    }

    // Ceiling
    if ball.top() <= 0.0 {
        ball.velocity.y = -ball.velocity.y;
        report.ceiling_bounce = true;
    }

    // Floor: the ball is served again, the round goes on
    if ball.bottom() >= screen.y {
        log::debug!("Ball fell at x={:.1}, resetting", ball.position.x);
        ball.reset();
        report.floor_reset = true;
    }

    // Bricks: no early exit, each hit flips vy again
    for brick in bricks.iter_mut().filter(|b| b.active) {
        if circle_rect_intersects(ball.position, ball.radius, &brick.rect) {
            ball.velocity.y = -ball.velocity.y;
            brick.active = false;
            report.bricks_destroyed += 1;
            log::debug!("Brick hit at ({:.0}, {:.0})", brick.rect.x, brick.rect.y);
        }
    }

    // Paddle
    if circle_rect_intersects(ball.position, ball.radius, paddle) {
        ball.velocity = paddle_deflection(ball, paddle);
        report.paddle_hit = true;
    }

    report
}

/// Velocity after bouncing off the paddle
///
/// The horizontal component depends only on where the ball struck, relative
/// to the paddle center, scaled from the ball's launch speed. The vertical
/// component keeps its magnitude and always points up.
pub fn paddle_deflection(ball: &Ball, paddle: &Rect) -> Vec2 {
    let offset = ball.position.x - paddle.center().x;
    let percent = offset / (paddle.width / 2.0);
    let radians = (percent * DEFLECTION_SCALE).clamp(-MAX_DEFLECTION, MAX_DEFLECTION);

    Vec2::new(
        ball.initial_velocity().x * radians * DEFLECTION_SPEED_FACTOR,
        -ball.velocity.y.abs(),
    )
}
