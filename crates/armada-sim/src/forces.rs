//! Steering force model.
//!
//! Four independent forces (social repulsion, center attraction, no-fly
//! avoidance, target pursuit) combined with fixed global weights.
//! Pure functions on plain vectors; the `steering` system gathers the
//! inputs from the world.

use glam::DVec3;

use armada_core::vector::{direction, unit_or_zero};

use crate::config::ForceConfig;

/// The four steering components before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceTerms {
    pub social: DVec3,
    pub center: DVec3,
    pub no_fly: DVec3,
    pub target: DVec3,
}

impl ForceTerms {
    /// Weighted sum of the four terms.
    pub fn combine(&self, config: &ForceConfig) -> DVec3 {
        config.social_weight * self.social
            + config.center_weight * self.center
            + config.no_fly_weight * self.no_fly
            + config.target_weight * self.target
    }
}

/// Social repulsion magnitude at separation `distance`.
///
/// Grows then decays exponentially; saturates below the saturation
/// distance so coincident agents do not blow up.
pub fn social_magnitude(distance: f64, saturation_distance: f64) -> f64 {
    let d = distance.max(saturation_distance);
    d / (0.5 * d).exp()
}

/// Repulsion from every neighbor position.
///
/// Each neighbor contributes its magnitude times the offset `self - other`.
/// The sum is not normalized, so crowding increases the total push.
pub fn social_force(
    position: DVec3,
    neighbors: impl IntoIterator<Item = DVec3>,
    config: &ForceConfig,
) -> DVec3 {
    neighbors.into_iter().fold(DVec3::ZERO, |acc, other| {
        let offset = position - other;
        acc + social_magnitude(offset.length(), config.social_saturation_distance) * offset
    })
}

/// Quadratic pull toward the origin.
pub fn center_force(position: DVec3, config: &ForceConfig) -> DVec3 {
    let distance = position.length();
    let factor = distance * distance / config.center_scale;
    factor * -unit_or_zero(position)
}

/// Capped exponential push away from the no-fly zone center.
pub fn no_fly_magnitude(distance: f64, config: &ForceConfig) -> f64 {
    let soft = (-(distance - config.no_fly_radius) / config.no_fly_falloff).exp();
    soft.min(config.no_fly_cap)
}

pub fn no_fly_force(position: DVec3, config: &ForceConfig) -> DVec3 {
    let away = position - config.no_fly_center();
    no_fly_magnitude(away.length(), config) * unit_or_zero(away)
}

/// Unit vector toward the target, zero without one.
pub fn pursuit_force(position: DVec3, target: Option<DVec3>) -> DVec3 {
    match target {
        Some(target) => direction(position, target),
        None => DVec3::ZERO,
    }
}

/// Evaluate all four terms for one agent.
pub fn evaluate(
    position: DVec3,
    neighbors: impl IntoIterator<Item = DVec3>,
    target: Option<DVec3>,
    config: &ForceConfig,
) -> ForceTerms {
    ForceTerms {
        social: social_force(position, neighbors, config),
        center: center_force(position, config),
        no_fly: no_fly_force(position, config),
        target: pursuit_force(position, target),
    }
}
