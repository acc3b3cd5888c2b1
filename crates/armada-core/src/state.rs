//! Population snapshots and run summaries.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{AgentState, Faction};
use crate::types::SimTime;

/// Complete population state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub time: SimTime,
    /// Every agent still in the population, dead or alive, in population order.
    pub agents: Vec<AgentView>,
}

impl PopulationSnapshot {
    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    pub fn get(&self, id: u32) -> Option<&AgentView> {
        self.agents.iter().find(|a| a.id == id)
    }
}

/// A single agent as seen from outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: u32,
    pub faction: Faction,
    pub position: DVec3,
    pub velocity: DVec3,
    pub force: DVec3,
    pub energy: f64,
    pub alive: bool,
    pub state: AgentState,
    /// Id of the held target. A target that died this step keeps its id
    /// here until the holder's next update; a compacted one reads `None`.
    pub target: Option<u32>,
    pub targeted_by: u32,
    pub neighbor_count: usize,
    /// Tick of the last neighbor cache rebuild.
    pub neighbors_refreshed_at: Option<u64>,
}

/// Survivor counts per faction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionCounts {
    pub red: usize,
    pub green: usize,
}

impl FactionCounts {
    pub fn add(&mut self, faction: Faction) {
        match faction {
            Faction::Red => self.red += 1,
            Faction::Green => self.green += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.red + self.green
    }
}

/// Running totals tracked by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatTally {
    pub shots: u64,
    pub explosions: u64,
}

/// End-of-run report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub steps: u64,
    pub initial_population: usize,
    pub survivors: Vec<u32>,
    pub by_faction: FactionCounts,
    pub tally: CombatTally,
}
