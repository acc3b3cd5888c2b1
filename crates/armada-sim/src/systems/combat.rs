//! Ranged combat: firing at the held target and applying damage.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use armada_core::components::{AgentId, Vitality};
use armada_core::events::{LogRecord, SimEvent};
use armada_core::state::CombatTally;

use crate::config::CombatConfig;
use crate::systems::targeting;

/// Fire at the shooter's target when it is within range and the
/// per-step fire roll succeeds. Returns whether a shot was fired.
///
/// The range check compares squared distance against `attack_range_sq`
/// as configured; the threshold is not squared again.
#[allow(clippy::too_many_arguments)]
pub fn attempt_attack(
    world: &mut World,
    shooter: Entity,
    rng: &mut ChaCha8Rng,
    config: &CombatConfig,
    dt: f64,
    tick: u64,
    events: &mut Vec<LogRecord>,
    tally: &mut CombatTally,
) -> bool {
    let Some(position) = targeting::live_position(world, shooter) else {
        return false;
    };
    let Some((target, target_pos)) = targeting::resolve_target(world, shooter) else {
        return false;
    };

    if position.distance_squared(target_pos) >= config.attack_range_sq {
        return false;
    }
    if rng.gen::<f64>() > config.fire_probability {
        return false;
    }

    let (Some(shooter_id), Some(target_id)) = (agent_id(world, shooter), agent_id(world, target))
    else {
        return false;
    };
    events.push(LogRecord::new(
        tick,
        SimEvent::Shot {
            shooter: shooter_id,
            target: target_id,
        },
    ));
    tally.shots += 1;

    apply_hit(world, target, config.damage, dt, tick, events, tally);
    true
}

/// Subtract `damage * dt` from the victim's energy. When energy drops
/// below zero the victim releases its own target, dies and an
/// `Explosion` is logged. Returns whether this hit was fatal.
///
/// Hits on agents that are already dead change nothing.
pub fn apply_hit(
    world: &mut World,
    victim: Entity,
    damage: f64,
    dt: f64,
    tick: u64,
    events: &mut Vec<LogRecord>,
    tally: &mut CombatTally,
) -> bool {
    let died = {
        let Ok(mut vitality) = world.get::<&mut Vitality>(victim) else {
            return false;
        };
        if !vitality.alive {
            return false;
        }
        vitality.energy -= damage * dt;
        if vitality.energy < 0.0 {
            vitality.alive = false;
            true
        } else {
            false
        }
    };

    if died {
        targeting::release(world, victim);
        let id = agent_id(world, victim).unwrap_or_default();
        events.push(LogRecord::new(tick, SimEvent::Explosion { id }));
        tally.explosions += 1;
        debug!(agent = id, tick, "agent destroyed");
    }
    died
}

fn agent_id(world: &World, entity: Entity) -> Option<u32> {
    world.get::<&AgentId>(entity).ok().map(|id| id.0)
}
