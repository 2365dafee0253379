//! Collision detection and response for the board edges and paddles
//!
//! Everything here is pure arithmetic over a single step. Walls and goal lines
//! are axis-aligned, so a collision is resolved by mirroring the overshoot
//! back inside and reflecting the angle with `mirror_x` / `mirror_y`.
//!
//! The paddle test samples the straight-line trajectory where it meets the
//! goal plane. It does not sweep the ball through the step, which is accurate
//! as long as one step never carries the ball across the whole board.

use glam::Vec2;

use super::state::{Paddles, Player, Wall};

/// Result of resolving the vertical axis for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalContact {
    /// No boundary reached
    Clear,
    /// Ball bounced; `y` is the corrected center
    Bounce { wall: Wall, y: f32 },
}

/// Result of resolving the horizontal axis for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalContact {
    /// No goal line reached
    Clear,
    /// Paddle returned the ball; `x` is the corrected center
    Returned { player: Player, x: f32 },
    /// Ball got past `defender`, the volley is over
    Missed { defender: Player },
}

/// Paddle and ball sizes needed for goal-line tests
#[derive(Debug, Clone, Copy)]
pub struct GoalGeometry {
    pub width: f32,
    pub ball_radius: f32,
    pub paddle_height: f32,
}

/// Is `crossing_y` inside the paddle band inflated by the ball radius?
#[inline]
pub fn paddle_collision_check(
    paddle_y: f32,
    crossing_y: f32,
    paddle_height: f32,
    ball_radius: f32,
) -> bool {
    let top = paddle_y - paddle_height / 2.0 - ball_radius;
    let bottom = paddle_y + paddle_height / 2.0 + ball_radius;
    crossing_y > top && crossing_y < bottom
}

/// Y where the flight path from `pos` meets the vertical plane `plane_x`
#[inline]
pub fn goal_crossing_y(pos: Vec2, angle: f32, plane_x: f32) -> f32 {
    // Negate tan to convert from cartesian to screen coordinates
    -angle.tan() * (plane_x - pos.x) + pos.y
}

/// Mirror an overshoot past the far boundary (`limit`) back inside
#[inline]
pub fn reflect_far(projected: f32, radius: f32, limit: f32) -> f32 {
    let overshoot = projected + radius - limit;
    limit - radius - overshoot
}

/// Mirror an overshoot past the near boundary (0) back inside
#[inline]
pub fn reflect_near(projected: f32, radius: f32) -> f32 {
    let overshoot = projected - radius;
    radius - overshoot
}

/// Resolve the top/bottom boundaries
pub fn vertical_contact(projected_y: f32, delta_y: f32, radius: f32, height: f32) -> VerticalContact {
    if delta_y > 0.0 {
        // Moving down
        if projected_y + radius > height {
            return VerticalContact::Bounce {
                wall: Wall::Bottom,
                y: reflect_far(projected_y, radius, height),
            };
        }
    } else if projected_y - radius < 0.0 {
        return VerticalContact::Bounce {
            wall: Wall::Top,
            y: reflect_near(projected_y, radius),
        };
    }
    VerticalContact::Clear
}

/// Resolve the goal lines and paddles
///
/// `pos` and `angle` are the ball's state before the step; the crossing point
/// is computed from them, not from the projected position.
pub fn goal_contact(
    pos: Vec2,
    angle: f32,
    projected_x: f32,
    delta_x: f32,
    paddles: &Paddles,
    geometry: &GoalGeometry,
) -> GoalContact {
    let GoalGeometry {
        width,
        ball_radius: radius,
        paddle_height,
    } = *geometry;

    let (defender, plane_x, reached) = if delta_x > 0.0 {
        (Player::P2, width - radius, projected_x + radius > width)
    } else {
        (Player::P1, radius, projected_x - radius < 0.0)
    };

    if !reached {
        return GoalContact::Clear;
    }

    let crossing_y = goal_crossing_y(pos, angle, plane_x);
    if !paddle_collision_check(paddles.get(defender), crossing_y, paddle_height, radius) {
        return GoalContact::Missed { defender };
    }

    let x = match defender {
        Player::P2 => reflect_far(projected_x, radius, width),
        Player::P1 => reflect_near(projected_x, radius),
    };
    GoalContact::Returned {
        player: defender,
        x,
    }
}
