//! Volley Pong - a two-player paddle and ball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, score)
//! - `config`: Board/ball/paddle configuration and validation
//! - `platform`: Frame driver that feeds the simulation (native and browser)

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::Config;
pub use error::ConfigError;
pub use platform::{DriverPhase, FrameDriver, TickInput};
pub use sim::{Engine, GameEvent, Player, Snapshot};

use std::f32::consts::{PI, TAU};

/// Default configuration constants
pub mod consts {
    /// Height of the playable area
    pub const BOARD_HEIGHT: f32 = 200.0;
    /// Width of the playable area
    pub const BOARD_WIDTH: f32 = 300.0;
    /// Goal depth on each paddle side
    pub const BOARD_X_PADDING: f32 = 50.0;
    /// Padding above and below the playable area
    pub const BOARD_Y_PADDING: f32 = 50.0;
    pub const BOUNDARY_SIZE: f32 = 5.0;

    /// Ball radius in board units
    pub const BALL_RADIUS: f32 = 4.0;
    /// Units per step at the start of every volley
    pub const INITIAL_VELOCITY: f32 = 4.0;
    /// Velocity multiplier applied on every bounce
    pub const BOUNCE_FACTOR: f32 = 1.1;
    /// Bounces stop speeding the ball up past this
    pub const MAX_VELOCITY: f32 = 1000.0;
    /// Serve angle, reaches both paddles on the default board
    pub const SERVE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 17.0;

    pub const PADDLE_WIDTH: f32 = 4.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;

    /// Score that ends a match
    pub const SCORE_MAX: u32 = 10;
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Reflect an angle across the horizontal axis (top/bottom wall bounce)
#[inline]
pub fn mirror_x(radians: f32) -> f32 {
    TAU - radians
}

/// Reflect an angle across the vertical axis (paddle bounce)
#[inline]
pub fn mirror_y(radians: f32) -> f32 {
    if radians < PI {
        PI - radians
    } else {
        PI * 3.0 - radians
    }
}
