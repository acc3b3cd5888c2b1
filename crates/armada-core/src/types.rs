//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Agent position in simulation space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Agent velocity, in distance per step unit (already scaled by Δt).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// The force applied during the previous velocity update.
/// Kept for the leapfrog half-step on the next move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Force(pub DVec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current step number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time (`tick * dt`).
    pub elapsed: f64,
}

impl Position {
    /// Squared distance to another position.
    pub fn distance_sq_to(&self, other: &Position) -> f64 {
        self.0.distance_squared(other.0)
    }
}

impl SimTime {
    /// Advance by one tick of length `dt`.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed += dt;
    }

    /// Whether the current tick falls on a multiple of `interval`.
    /// An interval of zero never matches.
    pub fn is_every(&self, interval: u64) -> bool {
        interval != 0 && self.tick % interval == 0
    }
}
