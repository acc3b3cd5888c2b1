//! Snapshot system: queries the ECS world and builds a PopulationSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use armada_core::components::*;
use armada_core::enums::{AgentState, Faction};
use armada_core::state::{AgentView, PopulationSnapshot};
use armada_core::types::{Force, Position, SimTime, Velocity};

use crate::systems::targeting;

/// Build a snapshot of every agent still in the roster.
pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    time: &SimTime,
    attack_range_sq: f64,
) -> PopulationSnapshot {
    PopulationSnapshot {
        time: *time,
        agents: roster
            .iter()
            .filter_map(|&entity| agent_view(world, entity, attack_range_sq))
            .collect(),
    }
}

/// View of one agent, or `None` if the handle no longer resolves.
pub fn agent_view(world: &World, entity: Entity, attack_range_sq: f64) -> Option<AgentView> {
    let mut query = world
        .query_one::<(
            &AgentId,
            &Faction,
            &Position,
            &Velocity,
            &Force,
            &Vitality,
            &TargetLock,
            &Neighbors,
        )>(entity)
        .ok()?;
    let (id, faction, position, velocity, force, vitality, lock, neighbors) = query.get()?;

    let target = lock
        .target
        .and_then(|t| world.get::<&AgentId>(t).ok().map(|id| id.0));

    Some(AgentView {
        id: id.0,
        faction: *faction,
        position: position.0,
        velocity: velocity.0,
        force: force.0,
        energy: vitality.energy,
        alive: vitality.alive,
        state: agent_state(world, entity, attack_range_sq),
        target,
        targeted_by: lock.targeted_by,
        neighbor_count: neighbors.entities.len(),
        neighbors_refreshed_at: neighbors.refreshed_at,
    })
}

/// Derive the combat state of an agent.
pub fn agent_state(world: &World, entity: Entity, attack_range_sq: f64) -> AgentState {
    let Some(position) = targeting::live_position(world, entity) else {
        return AgentState::Dead;
    };
    match targeting::resolve_target(world, entity) {
        None => AgentState::Idle,
        Some((_, target_pos)) if position.distance_squared(target_pos) < attack_range_sq => {
            AgentState::Engaged
        }
        Some(_) => AgentState::Targeting,
    }
}
