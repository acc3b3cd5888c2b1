//! Entity spawn factories for setting up the simulation world.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use armada_core::components::*;
use armada_core::enums::Faction;
use armada_core::types::{Force, Position, Velocity};

use crate::config::SpawnConfig;

/// Spawn a single agent at rest with full energy.
pub fn spawn_agent(
    world: &mut World,
    id: u32,
    faction: Faction,
    position: DVec3,
    energy: f64,
) -> Entity {
    world.spawn((
        AgentId(id),
        faction,
        Position(position),
        Velocity::default(),
        Force::default(),
        Vitality::new(energy),
        TargetLock::default(),
        Neighbors::default(),
    ))
}

/// Random integer spawn position for an agent of `faction`.
///
/// Factions start on opposite sides of the origin along x. Draw order is
/// x, y, z per agent, which fixes the random sequence for a given seed.
pub fn spawn_position(rng: &mut ChaCha8Rng, faction: Faction, spawn: &SpawnConfig) -> DVec3 {
    let x_range = match faction {
        Faction::Red => spawn.red_x,
        Faction::Green => spawn.green_x,
    };
    let x = rng.gen_range(x_range[0]..=x_range[1]);
    let y = rng.gen_range(spawn.y[0]..=spawn.y[1]);
    let z = rng.gen_range(spawn.z[0]..=spawn.z[1]);
    DVec3::new(x as f64, y as f64, z as f64)
}
