//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Binary agent grouping. Agents only target the opposite faction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Red,
    Green,
}

impl Faction {
    /// Faction for the `i`-th spawned agent (alternating).
    pub fn alternating(i: usize) -> Self {
        if i % 2 == 0 {
            Faction::Red
        } else {
            Faction::Green
        }
    }

    /// Integer type code written to the event log.
    pub fn code(self) -> u8 {
        match self {
            Faction::Red => 0,
            Faction::Green => 1,
        }
    }

    pub fn is_hostile_to(self, other: Faction) -> bool {
        self != other
    }
}

/// Per-agent combat state.
///
/// `Dead` is terminal. The alive states are derived each step from the
/// target lock and the distance to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    /// Alive with no target.
    #[default]
    Idle,
    /// Holding a target outside attack range.
    Targeting,
    /// Holding a target inside attack range.
    Engaged,
    Dead,
}
