//! Force evaluation and the velocity half of the leapfrog step.

use hecs::{Entity, World};
use tracing::warn;

use armada_core::components::{AgentId, Neighbors};
use armada_core::types::{Force, Velocity};
use armada_core::vector;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::forces;
use crate::integrator;
use crate::systems::targeting;

/// Recompute the steering force for `entity` and integrate its velocity.
///
/// The new velocity uses the average of the stored and the new force;
/// the new force then replaces the stored one for the next move phase.
pub fn run(world: &mut World, entity: Entity, config: &SimConfig, tick: u64) -> Result<(), SimError> {
    let Some(position) = targeting::live_position(world, entity) else {
        return Ok(());
    };
    let target = targeting::resolve_target(world, entity).map(|(_, pos)| pos);

    let terms = {
        let Ok(neighbors) = world.get::<&Neighbors>(entity) else {
            return Ok(());
        };
        let positions = neighbors
            .entities
            .iter()
            .filter_map(|&other| targeting::live_position(world, other));
        forces::evaluate(position, positions, target, &config.forces)
    };
    let force = terms.combine(&config.forces);

    if !vector::is_finite(force) {
        let agent = world.get::<&AgentId>(entity).map(|id| id.0).unwrap_or_default();
        warn!(agent, tick, ?terms, "non-finite steering force");
        return Err(SimError::NonFiniteForce { agent, tick });
    }

    let Ok((velocity, stored)) = world.query_one_mut::<(&mut Velocity, &mut Force)>(entity) else {
        return Ok(());
    };
    velocity.0 = integrator::advance_velocity(
        velocity.0,
        stored.0,
        force,
        config.dt,
        config.speed_limit(),
    );
    stored.0 = force;
    Ok(())
}
