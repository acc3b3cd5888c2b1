//! Vector helpers on top of `glam::DVec3`.
//!
//! glam covers add/scale/norm. What lives here are the guarded variants
//! the force model and integrator rely on: normalization that never
//! divides by zero and uniform (never per-axis) magnitude clamping.

use glam::DVec3;

/// Unit vector along `v`, or zero when `v` has no usable length.
pub fn unit_or_zero(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

/// Direction from `from` to `to` as a unit vector, or zero if they coincide.
pub fn direction(from: DVec3, to: DVec3) -> DVec3 {
    unit_or_zero(to - from)
}

/// Uniformly rescale `v` so its length does not exceed `max_len`.
/// Vectors already within bounds are returned unchanged.
pub fn clamp_magnitude(v: DVec3, max_len: f64) -> DVec3 {
    let len = v.length();
    if len > max_len {
        v / len * max_len
    } else {
        v
    }
}

/// Whether every component is finite.
pub fn is_finite(v: DVec3) -> bool {
    v.is_finite()
}
