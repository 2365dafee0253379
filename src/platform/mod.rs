//! Platform layer
//!
//! The frame driver sits between input/rendering and the simulation: it clamps
//! paddle input to the board, handles pause, and calls `Engine::step` once per
//! displayed frame. Browser bindings live in `web`.

#[cfg(target_arch = "wasm32")]
pub mod web;

use serde::{Deserialize, Serialize};

use crate::sim::{Engine, GameEvent};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Requested center for player 1's paddle (unclamped)
    pub p1: Option<f32>,
    /// Requested center for player 2's paddle (unclamped)
    pub p2: Option<f32>,
    /// Pause toggle
    pub pause: bool,
}

/// Whether frames advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverPhase {
    Playing,
    Paused,
}

/// Feeds one simulation step per frame
#[derive(Debug, Clone)]
pub struct FrameDriver {
    engine: Engine,
    phase: DriverPhase,
    /// Frames seen, paused or not
    frames: u64,
}

impl FrameDriver {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            phase: DriverPhase::Playing,
            frames: 0,
        }
    }

    /// Handle one displayed frame, returning the events it produced
    pub fn frame(&mut self, input: &TickInput) -> Vec<GameEvent> {
        self.frames += 1;

        if input.pause {
            self.phase = match self.phase {
                DriverPhase::Playing => DriverPhase::Paused,
                DriverPhase::Paused => DriverPhase::Playing,
            };
            log::info!("Driver {:?} at frame {}", self.phase, self.frames);
        }

        // Paddles are frozen along with the ball
        if self.phase == DriverPhase::Paused {
            return Vec::new();
        }

        let config = self.engine.config();
        let p1 = input.p1.map(|y| config.clamp_paddle_y(y));
        let p2 = input.p2.map(|y| config.clamp_paddle_y(y));
        if let Some(y) = p1 {
            self.engine.move_p1(y);
        }
        if let Some(y) = p2 {
            self.engine.move_p2(y);
        }

        self.engine.step();
        self.engine.drain_events()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::Player;

    fn driver() -> FrameDriver {
        FrameDriver::new(Engine::new(Config::default()).expect("valid config"))
    }

    #[test]
    fn test_frame_steps_once() {
        let mut driver = driver();
        driver.frame(&TickInput::default());
        assert_eq!(driver.engine().time_ticks(), 1);
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_paddle_input_is_clamped() {
        let mut driver = driver();
        driver.frame(&TickInput {
            p1: Some(-50.0),
            p2: Some(1000.0),
            ..Default::default()
        });
        assert_eq!(driver.engine().paddles().p1, 15.0);
        assert_eq!(driver.engine().paddles().p2, 185.0);

        driver.frame(&TickInput {
            p1: Some(60.0),
            ..Default::default()
        });
        assert_eq!(driver.engine().paddles().p1, 60.0);
        assert_eq!(driver.engine().paddles().p2, 185.0);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut driver = driver();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        driver.frame(&pause);
        assert_eq!(driver.phase(), DriverPhase::Paused);
        let ball = *driver.engine().ball();

        // Paused frames leave the simulation untouched
        for _ in 0..10 {
            let events = driver.frame(&TickInput {
                p1: Some(20.0),
                ..Default::default()
            });
            assert!(events.is_empty());
        }
        assert_eq!(*driver.engine().ball(), ball);
        assert_eq!(driver.engine().paddles().p1, 100.0);
        assert_eq!(driver.engine().time_ticks(), 0);

        driver.frame(&pause);
        assert_eq!(driver.phase(), DriverPhase::Playing);
        assert_eq!(driver.engine().time_ticks(), 1);
        assert_eq!(driver.frames(), 12);
    }

    #[test]
    fn test_frame_reports_volley_end() {
        let config = Config {
            serve_angle: 0.0,
            ..Config::default()
        };
        let mut driver = FrameDriver::new(Engine::new(config).expect("valid config"));
        let dodge = TickInput {
            p2: Some(0.0),
            ..Default::default()
        };

        let mut winner = None;
        for _ in 0..100 {
            for event in driver.frame(&dodge) {
                if let GameEvent::VolleyEnd { winner: w } = event {
                    winner = Some(w);
                }
            }
            if winner.is_some() {
                break;
            }
        }
        assert_eq!(winner, Some(Player::P1));
        assert_eq!(driver.engine().score().p1, 1);
    }
}
