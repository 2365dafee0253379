//! Configuration errors
//!
//! The simulation itself has no failure path. Everything that can go wrong is
//! caught when an `Engine` is built from a `Config`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("initial velocity must be positive and finite, got {0}")]
    NonPositiveVelocity(f32),

    #[error("bounce factor must be finite and greater than 1.0, got {0}")]
    BounceFactor(f32),

    #[error("max velocity must be finite and at least the initial velocity {initial}, got {max}")]
    MaxVelocity { max: f32, initial: f32 },

    #[error("ball radius must be positive and finite, got {0}")]
    BallRadius(f32),

    #[error("paddle dimensions must be positive and finite, got {width}x{height}")]
    PaddleSize { width: f32, height: f32 },

    #[error("board {width}x{height} is too small, each side must exceed {min}")]
    BoardTooSmall { width: f32, height: f32, min: f32 },

    #[error("serve angle must be finite, got {0}")]
    ServeAngle(f32),

    #[error("score max must be at least 1")]
    ScoreMax,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
