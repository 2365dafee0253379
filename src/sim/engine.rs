//! Fixed-step simulation engine
//!
//! One `step()` advances the ball by exactly one frame. The driver owns the
//! engine, moves paddles between steps, and reads the result back through
//! `snapshot()` and `drain_events()`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::{FRAC_PI_4, PI};

use super::collision::{GoalContact, GoalGeometry, VerticalContact, goal_contact, vertical_contact};
use super::state::{Ball, BallView, Board, Direction, GameEvent, Paddles, Player, Score, Snapshot};
use crate::config::Config;
use crate::error::ConfigError;
use crate::{mirror_x, mirror_y, normalize_angle};

/// The simulation: board, ball, paddles and score
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    ball: Ball,
    paddles: Paddles,
    score: Score,
    /// Events from the most recent step
    events: Vec<GameEvent>,
    /// Simulation tick counter
    time_ticks: u64,
}

impl Engine {
    /// Build an engine with the ball centered and both paddles centered
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = config.board;
        let ball = Ball::new(
            board.center(),
            config.ball_radius,
            config.initial_velocity,
            normalize_angle(config.serve_angle),
        );

        log::info!(
            "Engine ready: board {}x{}, serve angle {:.3} rad, playing to {}",
            board.width,
            board.height,
            ball.angle,
            config.score_max
        );

        Ok(Self {
            paddles: Paddles::centered(&board),
            score: Score::new(config.score_max),
            ball,
            config,
            events: Vec::new(),
            time_ticks: 0,
        })
    }

    /// Build an engine whose serve angle is drawn from `seed`
    ///
    /// The serve heads toward a random side, tilted at most 45 degrees off the
    /// horizontal.
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let tilt = rng.random_range(-FRAC_PI_4..=FRAC_PI_4);
        let serve_angle = if rng.random_bool(0.5) { tilt } else { PI - tilt };

        Self::new(Config {
            serve_angle: normalize_angle(serve_angle),
            ..config
        })
    }

    /// Advance the simulation by one frame
    ///
    /// The ball travels `velocity` units. Travel longer than
    /// `max_safe_velocity()` is split into equal legs so every wall and goal
    /// line the path reaches is resolved in order, with its own paddle test.
    pub fn step(&mut self) {
        self.events.clear();
        self.time_ticks += 1;

        let distance = self.ball.velocity;
        let legs = (distance / self.max_safe_velocity()).ceil().max(1.0) as u32;
        let leg = distance / legs as f32;

        for _ in 0..legs {
            if !self.advance(leg) {
                return;
            }
        }

        log::trace!(
            "tick {}: ball ({:.2}, {:.2})",
            self.time_ticks,
            self.ball.pos.x,
            self.ball.pos.y
        );
    }

    /// Move the ball `distance` units, resolving at most one bounce per axis.
    /// Returns false when the volley ended.
    fn advance(&mut self, distance: f32) -> bool {
        let Board { width, height, .. } = self.config.board;
        let radius = self.ball.size;
        let delta = self.ball.displacement(distance);
        let mut projected = self.ball.pos + delta;

        if let VerticalContact::Bounce { wall, y } =
            vertical_contact(projected.y, delta.y, radius, height)
        {
            projected.y = y;
            self.bounce(mirror_x);
            self.events.push(GameEvent::WallBounce { wall });
            log::debug!(
                "{:?} wall bounce, angle {:.3}, velocity {:.2}",
                wall,
                self.ball.angle,
                self.ball.velocity
            );
        }

        // A wall bounce in the same leg has already changed the angle, so the
        // crossing point follows the reflected path.
        let geometry = GoalGeometry {
            width,
            ball_radius: radius,
            paddle_height: self.config.paddle_height,
        };
        match goal_contact(
            self.ball.pos,
            self.ball.angle,
            projected.x,
            delta.x,
            &self.paddles,
            &geometry,
        ) {
            GoalContact::Clear => {}
            GoalContact::Returned { player, x } => {
                projected.x = x;
                self.bounce(mirror_y);
                self.events.push(GameEvent::PaddleHit { player });
                log::debug!(
                    "{:?} paddle hit, angle {:.3}, velocity {:.2}",
                    player,
                    self.ball.angle,
                    self.ball.velocity
                );
            }
            GoalContact::Missed { defender } => {
                // No movement this frame; the ball restarts from the center
                self.end_volley(defender.opponent());
                return false;
            }
        }

        // Legs never exceed max_safe_velocity(), so this only absorbs rounding
        projected.x = projected.x.clamp(radius, width - radius);
        projected.y = projected.y.clamp(radius, height - radius);
        self.ball.pos = projected;
        true
    }

    /// Reflect the ball angle and speed it up
    fn bounce(&mut self, reflect: fn(f32) -> f32) {
        self.ball.angle = normalize_angle(reflect(self.ball.angle));
        self.ball.velocity = (self.ball.velocity * self.config.bounce_factor)
            .min(self.config.max_velocity);
    }

    /// Score a point for `winner` and serve the next volley
    ///
    /// The ball keeps the angle it had when the volley ended.
    pub fn end_volley(&mut self, winner: Player) {
        self.events.push(GameEvent::VolleyEnd { winner });
        let match_over = self.score.award(winner);

        if match_over {
            self.events.push(GameEvent::MatchEnd { winner });
            log::info!("{:?} wins the match, score reset", winner);
        } else {
            log::info!(
                "{:?} wins the volley, score {} - {}",
                winner,
                self.score.p1,
                self.score.p2
            );
        }

        self.ball.pos = self.config.board.center();
        self.ball.velocity = self.config.initial_velocity;
    }

    /// Set player 1's paddle center (clamping is the driver's job)
    pub fn move_p1(&mut self, y: f32) {
        self.paddles.p1 = y;
    }

    /// Set player 2's paddle center (clamping is the driver's job)
    pub fn move_p2(&mut self, y: f32) {
        self.paddles.p2 = y;
    }

    /// Longest leg for which one overshoot reflection always lands on the board
    pub fn max_safe_velocity(&self) -> f32 {
        let Board { width, height, .. } = self.config.board;
        width.min(height) - 2.0 * self.ball.size
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.config.board
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddles(&self) -> &Paddles {
        &self.paddles
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Horizontal travel direction (derived from the angle)
    pub fn direction(&self) -> Direction {
        self.ball.direction()
    }

    /// Events from the most recent step
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events from the most recent step
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read model for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                size: self.ball.size,
            },
            paddles: self.paddles,
            paddle_width: self.config.paddle_width,
            paddle_height: self.config.paddle_height,
            score: self.score,
            board: self.config.board,
            direction: self.direction(),
            time_ticks: self.time_ticks,
        }
    }
}
