//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! `Position`, `Velocity` and `Force` are defined in `types.rs` and
//! double as components.

use hecs::Entity;
use serde::{Deserialize, Serialize};

/// Unique agent id, assigned sequentially at creation. Also the
/// population order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// Hit points and the one-way alive flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitality {
    pub energy: f64,
    /// Once false, never true again.
    pub alive: bool,
}

impl Vitality {
    pub fn new(energy: f64) -> Self {
        Self {
            energy,
            alive: true,
        }
    }
}

/// Combat linkage between agents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetLock {
    /// Weak handle to the current target. May point at a despawned
    /// entity until the holder's next update clears it.
    pub target: Option<Entity>,
    /// Number of agents currently holding this agent as their target.
    pub targeted_by: u32,
}

/// Periodically rebuilt list of nearby agents, in population order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub entities: Vec<Entity>,
    /// Tick of the last rebuild.
    pub refreshed_at: Option<u64>,
}
