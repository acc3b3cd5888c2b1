//! Leapfrog integration with uniform speed clamping.
//!
//! A step is split in two phases. The move phase advances position with
//! the velocity and force left over from the previous step; the update
//! phase then averages the stored force with the freshly computed one to
//! advance velocity. Swapping the phases changes the trajectory.

use glam::DVec3;

use armada_core::vector::clamp_magnitude;

/// Displacement for the move phase: `dt*v + 0.5*force*dt²`, clamped to
/// `limit` by uniform rescaling.
pub fn displacement(velocity: DVec3, force: DVec3, dt: f64, limit: f64) -> DVec3 {
    let delta = dt * velocity + (0.5 * force) * (dt * dt);
    clamp_magnitude(delta, limit)
}

/// Velocity for the update phase: `v + dt*0.5*(prev + new)`, clamped to
/// `limit` by uniform rescaling.
pub fn advance_velocity(
    velocity: DVec3,
    previous_force: DVec3,
    new_force: DVec3,
    dt: f64,
    limit: f64,
) -> DVec3 {
    let v = velocity + dt * 0.5 * (previous_force + new_force);
    clamp_magnitude(v, limit)
}
