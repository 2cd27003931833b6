//! A position and orientation basis sampled at a specific time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{project, slerp_vectors};

/// A position plus forward/up orientation basis, sampled at time [`t`].
///
/// The orientation is stored as two direction vectors rather than a
/// quaternion because spatial audio backends (panners, HRTF convolvers)
/// consume forward/up bases directly. Both directions are unit length by
/// convention; the type does not normalize on write, and interpolation of
/// non-unit directions is undefined.
///
/// The timestamp deliberately rides along with the transform so that a
/// pose sample can serve as an interpolation endpoint without a parallel
/// time array. It is a caller-supplied scalar in any monotonic unit;
/// seconds by convention.
///
/// [`t`]: Self::t
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    /// Sample timestamp.
    pub t: f32,
    /// Position in world space.
    pub p: Vec3,
    /// Forward direction, unit length by convention.
    pub f: Vec3,
    /// Up direction, unit length by convention, roughly orthogonal to `f`.
    pub u: Vec3,
}

impl Default for Pose {
    /// Origin pose looking down -Z with +Y up, at time zero.
    fn default() -> Self {
        Self {
            t: 0.0,
            p: Vec3::ZERO,
            f: Vec3::NEG_Z,
            u: Vec3::Y,
        }
    }
}

impl Pose {
    /// Create the default pose: origin, looking down -Z with +Y up, at
    /// time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite position and both direction vectors in place.
    ///
    /// The timestamp is NOT touched; callers that need a stamped sample
    /// assign [`t`](Self::t) separately. Directions are taken as given,
    /// without normalization.
    pub fn set(&mut self, p: Vec3, f: Vec3, u: Vec3) {
        self.p = p;
        self.f = f;
        self.u = u;
    }

    /// Copy `other`'s position and orientation into this pose.
    ///
    /// The timestamp is NOT copied. This asymmetry with
    /// [`interpolate`](Self::interpolate) (which does stamp `t` on the
    /// interior branch) is part of the contract: clamping to an endpoint
    /// adopts the endpoint's transform but keeps whatever time this pose
    /// was last stamped with.
    pub fn copy_transform(&mut self, other: &Self) {
        self.p = other.p;
        self.f = other.f;
        self.u = other.u;
    }

    /// Interpolate between `start` and `end` at query time `t`, storing
    /// the result in this pose.
    ///
    /// Position is lerped; forward/up are slerped so the basis stays on
    /// the unit sphere mid-transition. Branches, in order of precedence:
    ///
    /// 1. `t <= start.t`: adopt `start`'s transform (own `t` unchanged).
    /// 2. `end.t <= t`: adopt `end`'s transform (own `t` unchanged).
    /// 3. otherwise `start.t < t < end.t`: blend by the normalized
    ///    position of `t` within the interval, and stamp own `t` with the
    ///    query time.
    ///
    /// A degenerate interval (`start.t == end.t`) is always caught by the
    /// clamp branches, so the division inside [`project`] is only reached
    /// with a strictly positive interval. No errors are raised for
    /// out-of-order endpoints or non-unit directions; results degrade
    /// silently.
    pub fn interpolate(&mut self, start: &Self, end: &Self, t: f32) {
        debug_assert!(t.is_finite(), "interpolate: query time must be finite");
        if t <= start.t {
            self.copy_transform(start);
        } else if end.t <= t {
            self.copy_transform(end);
        } else if start.t < t {
            let alpha = project(t, start.t, end.t);
            self.p = start.p.lerp(end.p, alpha);
            self.f = slerp_vectors(start.f, end.f, alpha);
            self.u = slerp_vectors(start.u, end.u, alpha);
            self.t = t;
        }
    }
}
