//! Target acquisition and retention.
//!
//! Greedy nearest-unsaturated assignment, recomputed per agent in
//! population order. Not globally optimal: several agents may race for
//! the same scarce targets within a step.
//!
//! `TargetLock::targeted_by` is maintained incrementally. Every path that
//! sets `target` to `Some` increments the target's counter and every path
//! that clears it decrements, as long as the target is still in the world.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use armada_core::components::{AgentId, TargetLock, Vitality};
use armada_core::enums::Faction;
use armada_core::types::Position;

use crate::config::TargetingConfig;

/// Position of `entity` if it is still in the world and alive.
pub fn live_position(world: &World, entity: Entity) -> Option<DVec3> {
    let vitality = world.get::<&Vitality>(entity).ok()?;
    if !vitality.alive {
        return None;
    }
    world.get::<&Position>(entity).ok().map(|p| p.0)
}

/// The holder's target and its position, if the handle still resolves to
/// a live agent.
pub fn resolve_target(world: &World, holder: Entity) -> Option<(Entity, DVec3)> {
    let target = world.get::<&TargetLock>(holder).ok()?.target?;
    live_position(world, target).map(|pos| (target, pos))
}

/// Drop the holder's lock and decrement the target's holder count.
pub fn release(world: &mut World, holder: Entity) {
    let target = match world.get::<&mut TargetLock>(holder) {
        Ok(mut lock) => lock.target.take(),
        Err(_) => return,
    };
    if let Some(target) = target {
        if let Ok(mut lock) = world.get::<&mut TargetLock>(target) {
            lock.targeted_by = lock.targeted_by.saturating_sub(1);
        }
    }
}

/// Clear a target that died or left the population since the last update.
pub fn clear_stale(world: &mut World, holder: Entity) {
    let Some(target) = world.get::<&TargetLock>(holder).ok().and_then(|l| l.target) else {
        return;
    };
    if !world.contains(target) {
        if let Ok(mut lock) = world.get::<&mut TargetLock>(holder) {
            lock.target = None;
        }
    } else if live_position(world, target).is_none() {
        release(world, holder);
    }
}

/// Keep, drop or acquire a target for `holder`.
///
/// A held target is released when it drifts beyond the drop distance, or
/// with a small fixed probability otherwise. The random draw is only taken
/// for targets still within the drop distance. A holder left without a
/// target then locks onto the nearest live, hostile, unsaturated agent
/// strictly inside the search radius.
pub fn refresh(
    world: &mut World,
    holder: Entity,
    rng: &mut ChaCha8Rng,
    config: &TargetingConfig,
) {
    let Some(position) = live_position(world, holder) else {
        return;
    };
    let Ok(faction) = world.get::<&Faction>(holder).map(|f| *f) else {
        return;
    };

    let current = world.get::<&TargetLock>(holder).ok().and_then(|l| l.target);
    if let Some(target) = current {
        match live_position(world, target) {
            Some(target_pos) => {
                let distance_sq = position.distance_squared(target_pos);
                if distance_sq > config.drop_distance_sq
                    || rng.gen::<f64>() < config.drop_probability
                {
                    release(world, holder);
                }
            }
            None => clear_stale(world, holder),
        }
    }

    let has_target = world
        .get::<&TargetLock>(holder)
        .map(|l| l.target.is_some())
        .unwrap_or(true);
    if has_target {
        return;
    }

    if let Some(target) = find_nearest(world, holder, position, faction, config) {
        if let Ok(mut lock) = world.get::<&mut TargetLock>(holder) {
            lock.target = Some(target);
        }
        if let Ok(mut lock) = world.get::<&mut TargetLock>(target) {
            lock.targeted_by += 1;
        }
        trace!(?holder, ?target, "target acquired");
    }
}

/// Nearest eligible opponent strictly inside the search radius.
/// Equal distances resolve to the lowest id, i.e. the first in
/// population order.
pub fn find_nearest(
    world: &World,
    holder: Entity,
    position: DVec3,
    faction: Faction,
    config: &TargetingConfig,
) -> Option<Entity> {
    let mut best: Option<(f64, AgentId, Entity)> = None;

    let mut query = world.query::<(&AgentId, &Faction, &Position, &Vitality, &TargetLock)>();
    for (entity, (id, other_faction, other_pos, vitality, lock)) in query.iter() {
        if entity == holder
            || !faction.is_hostile_to(*other_faction)
            || !vitality.alive
            || lock.targeted_by >= config.max_lock_holders
        {
            continue;
        }
        let distance_sq = position.distance_squared(other_pos.0);
        if distance_sq >= config.search_radius_sq {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_sq, best_id, _)) => {
                distance_sq < best_sq || (distance_sq == best_sq && *id < best_id)
            }
        };
        if better {
            best = Some((distance_sq, *id, entity));
        }
    }

    best.map(|(_, _, entity)| entity)
}
