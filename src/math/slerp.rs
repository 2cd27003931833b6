//! Shortest-arc spherical interpolation of unit direction vectors.

use glam::Vec3;

/// Below this sine-of-angle the slerp denominator is too small to divide by
/// and the interpolation falls back to a normalized lerp.
const SIN_ANGLE_LIMIT: f32 = 1e-3;

/// Spherically interpolate between the unit vectors `a` and `b` by factor
/// `t`, following the shortest arc on the unit sphere.
///
/// Unlike a plain lerp, the result stays on the unit sphere and sweeps at a
/// constant angular rate, which keeps interpolated forward/up bases from
/// collapsing toward the origin mid-transition.
///
/// Both inputs must be unit length; non-unit inputs produce undefined
/// directions (checked in debug builds only). Nearly parallel or
/// antiparallel inputs fall back to a normalized lerp. The antiparallel
/// case has no unique shortest arc, so the fallback degenerates to `a` at
/// the midpoint rather than picking an arbitrary rotation plane.
#[must_use]
pub fn slerp_vectors(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    debug_assert!(a.is_normalized(), "slerp_vectors: `a` must be unit length");
    debug_assert!(b.is_normalized(), "slerp_vectors: `b` must be unit length");

    let d = a.dot(b).clamp(-1.0, 1.0);
    let angle = d.acos();
    let denom = angle.sin();
    if denom < SIN_ANGLE_LIMIT {
        // avoid dividing by a very small number
        return a.lerp(b, t).normalize_or(a);
    }
    (a * ((1.0 - t) * angle).sin() + b * (t * angle).sin()) / denom
}
