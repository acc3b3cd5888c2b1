//! Cleanup system: compacts dead agents out of the population.
//!
//! Runs on a fixed interval rather than every tick. Handles held by
//! other agents to a despawned entity simply stop resolving.

use hecs::{Entity, World};

use armada_core::components::Vitality;

/// Remove dead agents from the roster and despawn them.
/// Uses a pre-allocated buffer to avoid per-run allocation.
/// Returns the number of agents removed.
pub fn run(world: &mut World, roster: &mut Vec<Entity>, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    roster.retain(|&entity| {
        let alive = world
            .get::<&Vitality>(entity)
            .map(|v| v.alive)
            .unwrap_or(false);
        if !alive {
            despawn_buffer.push(entity);
        }
        alive
    });

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
