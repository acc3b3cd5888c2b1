//! Move phase.
//!
//! Advances every live agent with the velocity and force from the end of
//! the previous step, then logs the new kinematic state. Runs for the
//! whole population before any agent updates, so the update phase sees
//! one consistent set of positions.

use hecs::{Entity, World};

use armada_core::components::{AgentId, Vitality};
use armada_core::events::{LogRecord, SimEvent};
use armada_core::types::{Force, Position, Velocity};

use crate::integrator;

/// Run the move phase for all agents in population order.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    dt: f64,
    limit: f64,
    tick: u64,
    events: &mut Vec<LogRecord>,
) {
    for &entity in roster {
        let Ok((id, vitality, position, velocity, force)) = world
            .query_one_mut::<(&AgentId, &Vitality, &mut Position, &Velocity, &Force)>(entity)
        else {
            continue;
        };
        if !vitality.alive {
            continue;
        }

        position.0 += integrator::displacement(velocity.0, force.0, dt, limit);

        events.push(LogRecord::new(
            tick,
            SimEvent::Position {
                id: id.0,
                position: position.0,
                velocity: velocity.0,
                force: force.0,
            },
        ));
    }
}
