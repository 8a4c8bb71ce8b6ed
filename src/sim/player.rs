//! Player physics
//!
//! Screen coordinates: `pos` is the top-left corner and y grows downward, so
//! the player rests at `ground_y - height` and a jump is a negative velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (x never changes during a run)
    pub pos: Vec2,
    /// Width and height of the bounding box
    pub size: Vec2,
    /// Vertical velocity (pixels/tick, negative = up)
    pub vel_y: f32,
    /// Between a jump impulse and landing
    pub airborne: bool,
}

impl Player {
    /// Player standing on the ground with no velocity
    pub fn at_rest(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.player_rest_y()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel_y: 0.0,
            airborne: false,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Advance one tick: semi-implicit Euler (velocity first, then position),
    /// then clamp to the ground. Landing is the only place `airborne` clears.
    pub fn step(&mut self, gravity: f32, rest_y: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.pos.y >= rest_y {
            self.pos.y = rest_y;
            self.vel_y = 0.0;
            self.airborne = false;
        }
    }

    /// Apply the jump impulse if grounded. Returns false (and changes nothing)
    /// while airborne.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.vel_y = impulse;
        self.airborne = true;
        true
    }
}
