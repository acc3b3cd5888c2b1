//! Periodic neighbor cache.
//!
//! A full population scan per agent happens only on refresh ticks. Between
//! refreshes the cached list is stale: agents that moved into range are
//! missed and agents that died are skipped when the social force is summed.

use hecs::{Entity, World};

use armada_core::components::{AgentId, Neighbors, Vitality};
use armada_core::types::Position;

/// Replace `entity`'s neighbor list with every other live agent strictly
/// inside `radius_sq`, in population order.
pub fn rebuild(world: &mut World, entity: Entity, radius_sq: f64, tick: u64) {
    let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
        return;
    };

    let mut found: Vec<(AgentId, Entity)> = Vec::new();
    {
        let mut query = world.query::<(&AgentId, &Position, &Vitality)>();
        for (other, (id, other_pos, vitality)) in query.iter() {
            if other == entity || !vitality.alive {
                continue;
            }
            if position.distance_sq_to(other_pos) < radius_sq {
                found.push((*id, other));
            }
        }
    }
    found.sort_unstable_by_key(|(id, _)| *id);

    if let Ok(mut neighbors) = world.get::<&mut Neighbors>(entity) {
        neighbors.entities.clear();
        neighbors.entities.extend(found.into_iter().map(|(_, e)| e));
        neighbors.refreshed_at = Some(tick);
    }
}
