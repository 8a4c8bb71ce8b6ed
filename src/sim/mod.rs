//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Injectable spawn randomness (seeded `Pcg32` by default)
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod field;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_collision};
pub use field::{Obstacle, ObstacleField, SpawnRoll};
pub use player::Player;
pub use state::{GamePhase, GameState, PlayerView, Snapshot};
pub use tick::{on_jump_intent, tick};
