//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per call
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod state;

pub use collision::{
    GoalContact, GoalGeometry, VerticalContact, goal_contact, goal_crossing_y,
    paddle_collision_check, vertical_contact,
};
pub use engine::Engine;
pub use state::{
    Ball, BallView, Board, Direction, GameEvent, Paddles, Player, Score, Snapshot, Wall,
};
