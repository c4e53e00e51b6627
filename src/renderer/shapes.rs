//! Shape decomposition for backends without native primitives

use glam::Vec2;

use crate::sim::Rect;

/// A rounded rectangle split into two overlapping bars and four corner discs
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectParts {
    /// Full width, inset top and bottom by the corner radius
    pub horizontal: Rect,
    /// Full height, inset left and right by the corner radius
    pub vertical: Rect,
    /// Corner disc centers (top-left, top-right, bottom-right, bottom-left)
    pub corners: [Vec2; 4],
    pub corner_radius: f32,
}

/// Split a rounded rectangle into plain rects and circles
///
/// Corner radius is `roundness * min(width, height) / 2`, roundness clamped
/// to `[0, 1]`.
pub fn rounded_rect_parts(rect: Rect, roundness: f32) -> RoundedRectParts {
    let r = roundness.clamp(0.0, 1.0) * rect.width.min(rect.height) / 2.0;
    let min = rect.min() + Vec2::splat(r);
    let max = rect.max() - Vec2::splat(r);

    RoundedRectParts {
        horizontal: Rect::new(rect.x, rect.y + r, rect.width, rect.height - 2.0 * r),
        vertical: Rect::new(rect.x + r, rect.y, rect.width - 2.0 * r, rect.height),
        corners: [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ],
        corner_radius: r,
    }
}
