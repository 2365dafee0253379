//! Engine configuration
//!
//! Fixed at construction. Partial JSON documents are accepted; missing fields
//! fall back to the defaults in `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Board;

/// Full configuration for one engine instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: Board,

    // === Ball ===
    /// Ball radius
    pub ball_radius: f32,
    /// Velocity at the start of every volley (units per step)
    pub initial_velocity: f32,
    /// Multiplier applied to velocity on each bounce
    pub bounce_factor: f32,
    /// Ceiling for bounce speed-ups
    pub max_velocity: f32,
    /// Angle of the first volley (radians, 0 = rightward, counter-clockwise)
    pub serve_angle: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Score ===
    /// Reaching this score ends the match and resets both counters
    pub score_max: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Board::default(),

            ball_radius: BALL_RADIUS,
            initial_velocity: INITIAL_VELOCITY,
            bounce_factor: BOUNCE_FACTOR,
            max_velocity: MAX_VELOCITY,
            serve_angle: SERVE_ANGLE,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            score_max: SCORE_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check for degenerate geometry or motion
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_velocity.is_finite() && self.initial_velocity > 0.0) {
            return Err(ConfigError::NonPositiveVelocity(self.initial_velocity));
        }
        if !(self.bounce_factor.is_finite() && self.bounce_factor > 1.0) {
            return Err(ConfigError::BounceFactor(self.bounce_factor));
        }
        if !(self.max_velocity.is_finite() && self.max_velocity >= self.initial_velocity) {
            return Err(ConfigError::MaxVelocity {
                max: self.max_velocity,
                initial: self.initial_velocity,
            });
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        if !self.serve_angle.is_finite() {
            return Err(ConfigError::ServeAngle(self.serve_angle));
        }

        let paddle_ok = |v: f32| v.is_finite() && v > 0.0;
        if !(paddle_ok(self.paddle_width) && paddle_ok(self.paddle_height)) {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }

        // Ball must fit with room to move, paddles must fit vertically
        let min = (self.ball_radius * 2.0).max(self.paddle_height);
        let Board { width, height, .. } = self.board;
        if !(width.is_finite() && height.is_finite()) || width <= min || height <= min {
            return Err(ConfigError::BoardTooSmall { width, height, min });
        }

        if self.score_max == 0 {
            return Err(ConfigError::ScoreMax);
        }

        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Clamp a paddle center to keep the whole paddle on the board
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.board.height - half_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.board.width, 300.0);
        assert_eq!(config.board.height, 200.0);
        assert_eq!(config.initial_velocity, 4.0);
        assert_eq!(config.score_max, 10);
    }

    #[test]
    fn test_rejects_degenerate_velocity() {
        for v in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = Config {
                initial_velocity: v,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NonPositiveVelocity(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_growing_bounce_factor() {
        let config = Config {
            bounce_factor: 1.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BounceFactor(_))));
    }

    #[test]
    fn test_rejects_max_velocity_below_initial() {
        let config = Config {
            max_velocity: 3.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MaxVelocity { max, initial }) if max == 3.0 && initial == 4.0
        ));
    }

    #[test]
    fn test_rejects_board_smaller_than_paddle() {
        let mut config = Config::default();
        config.board.height = 20.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooSmall { min, .. }) if min == 30.0
        ));
    }

    #[test]
    fn test_rejects_zero_score_max() {
        let config = Config {
            score_max: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ScoreMax)));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = Config::from_json(r#"{ "score_max": 3, "board": { "width": 400 } }"#)
            .expect("valid config");
        assert_eq!(config.score_max, 3);
        assert_eq!(config.board.width, 400.0);
        assert_eq!(config.board.height, 200.0);
        assert_eq!(config.ball_radius, 4.0);
    }

    #[test]
    fn test_from_json_reports_parse_and_validation_errors() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "initial_velocity": -2 }"#),
            Err(ConfigError::NonPositiveVelocity(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/volley-pong.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(0.0), 15.0);
        assert_eq!(config.clamp_paddle_y(500.0), 185.0);
        assert_eq!(config.clamp_paddle_y(42.0), 42.0);
    }
}
