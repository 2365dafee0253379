//! Simulation state types
//!
//! Coordinates are board space: x grows rightward over [0, width], y grows
//! downward over [0, height]. Angles are mathematical (counter-clockwise), so
//! the vertical component is inverted when moving the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Board geometry (immutable after construction)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    /// Height of the playable area
    pub height: f32,
    /// Width of the playable area
    pub width: f32,
    /// Goal depth beside each paddle (render only)
    pub x_padding: f32,
    /// Padding above and below the playable area (render only)
    pub y_padding: f32,
    /// Thickness of the top and bottom boundaries (render only)
    pub boundary_size: f32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            height: BOARD_HEIGHT,
            width: BOARD_WIDTH,
            x_padding: BOARD_X_PADDING,
            y_padding: BOARD_Y_PADDING,
            boundary_size: BOUNDARY_SIZE,
        }
    }
}

impl Board {
    /// Center of the playable area
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Defends the left goal line (x = 0)
    P1,
    /// Defends the right goal line (x = width)
    P2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// Horizontal travel direction, derived from the ball angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Top or bottom boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position in board space
    pub pos: Vec2,
    /// Radius
    pub size: f32,
    /// Units moved per step
    pub velocity: f32,
    /// Radians, 0 = rightward, counter-clockwise
    pub angle: f32,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, velocity: f32, angle: f32) -> Self {
        Self {
            pos,
            size,
            velocity,
            angle,
        }
    }

    /// Displacement for `distance` units along the current angle, in screen
    /// coordinates
    pub fn displacement(&self, distance: f32) -> Vec2 {
        Vec2::new(
            self.angle.cos() * distance,
            // Invert sin to match screen coordinates
            -self.angle.sin() * distance,
        )
    }

    pub fn direction(&self) -> Direction {
        if self.angle.cos() > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// Paddle centers (dimensions live in `Config`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddles {
    pub p1: f32,
    pub p2: f32,
}

impl Paddles {
    pub fn centered(board: &Board) -> Self {
        let middle = board.height / 2.0;
        Self {
            p1: middle,
            p2: middle,
        }
    }

    /// Center of the paddle defending `player`'s goal line
    pub fn get(&self, player: Player) -> f32 {
        match player {
            Player::P1 => self.p1,
            Player::P2 => self.p2,
        }
    }
}

/// Match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub p1: u32,
    pub p2: u32,
    pub max: u32,
}

impl Score {
    pub fn new(max: u32) -> Self {
        Self { p1: 0, p2: 0, max }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::P1 => self.p1,
            Player::P2 => self.p2,
        }
    }

    /// Award a point. Returns true when this ends the match, in which case both
    /// counters are already back at zero.
    pub fn award(&mut self, winner: Player) -> bool {
        let points = match winner {
            Player::P1 => &mut self.p1,
            Player::P2 => &mut self.p2,
        };
        *points += 1;

        if *points >= self.max {
            self.p1 = 0;
            self.p2 = 0;
            return true;
        }
        false
    }
}

/// Things that happened during the last step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom boundary
    WallBounce { wall: Wall },
    /// Ball was returned by a paddle
    PaddleHit { player: Player },
    /// Ball crossed a goal line, `winner` scores
    VolleyEnd { winner: Player },
    /// `winner` reached the score limit, scores were reset
    MatchEnd { winner: Player },
}

/// Ball as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Read model handed to rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: BallView,
    pub paddles: Paddles,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub score: Score,
    pub board: Board,
    pub direction: Direction,
    pub time_ticks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_ball_displacement_inverts_y() {
        let ball = Ball::new(Vec2::ZERO, 4.0, 4.0, PI / 2.0);
        let delta = ball.displacement(2.0);
        assert!(delta.x.abs() < 1e-5);
        assert!((delta.y + 2.0).abs() < 1e-5, "upward angle moves toward y = 0");
    }

    #[test]
    fn test_ball_direction() {
        assert_eq!(
            Ball::new(Vec2::ZERO, 4.0, 4.0, 0.2).direction(),
            Direction::Right
        );
        assert_eq!(
            Ball::new(Vec2::ZERO, 4.0, 4.0, PI - 0.2).direction(),
            Direction::Left
        );
        assert_eq!(
            Ball::new(Vec2::ZERO, 4.0, 4.0, 1.9 * PI).direction(),
            Direction::Right
        );
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::new(3);
        assert!(!score.award(Player::P1));
        assert!(!score.award(Player::P2));
        assert!(!score.award(Player::P1));
        assert_eq!((score.p1, score.p2), (2, 1));

        assert!(score.award(Player::P1));
        assert_eq!((score.p1, score.p2), (0, 0));
        assert_eq!(score.max, 3);
    }

    #[test]
    fn test_board_center() {
        assert_eq!(Board::default().center(), Vec2::new(150.0, 100.0));
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::P1.opponent(), Player::P2);
        assert_eq!(Player::P2.opponent(), Player::P1);
    }
}
