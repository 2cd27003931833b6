//! Smoothed pose tracking for one audio source or listener.

use glam::Vec3;

use crate::pose::Pose;

/// Owns the interpolation endpoints for a single moving source or listener
/// and re-derives the audible pose each tick.
///
/// Discrete position updates arrive through [`set_target`](Self::set_target)
/// or [`snap`](Self::snap); the audio render loop calls
/// [`update`](Self::update) with its own clock and reads
/// [`current`](Self::current). Retargeting mid-transition starts the new
/// transition from wherever the pose currently is, so motion never jumps
/// backward to a stale endpoint.
///
/// All timestamps share one caller-chosen monotonic unit. The tracker never
/// reads a clock and is plain mutable state; wrap it in a lock if it is
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PoseTracker {
    start: Pose,
    current: Pose,
    end: Pose,
}

impl PoseTracker {
    /// Create a tracker at the default pose (origin, -Z forward, +Y up).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The interpolated pose as of the last [`update`](Self::update).
    #[must_use]
    pub fn current(&self) -> &Pose {
        &self.current
    }

    /// The target pose the tracker is currently approaching.
    #[must_use]
    pub fn end(&self) -> &Pose {
        &self.end
    }

    /// Begin a transition toward a new target pose.
    ///
    /// The transition starts from the current interpolated pose at time `t`
    /// and reaches the target at `t + transition_time`. A zero or negative
    /// `transition_time` collapses the transition to an instant jump; the
    /// negative case is treated as zero.
    pub fn set_target(
        &mut self,
        p: Vec3,
        f: Vec3,
        u: Vec3,
        t: f32,
        transition_time: f32,
    ) {
        if transition_time < 0.0 {
            log::debug!(
                "negative transition time {transition_time}, snapping to target"
            );
        }
        let dt = transition_time.max(0.0);

        self.start.copy_transform(&self.current);
        self.start.t = t;
        self.end.set(p, f, u);
        self.end.t = t + dt;

        // Zero-length interval: interpolate() clamps to `start`, so the
        // start endpoint must already hold the target transform.
        if dt == 0.0 {
            self.start.copy_transform(&self.end);
        }
    }

    /// Jump to a new pose immediately, with no transition.
    pub fn snap(&mut self, p: Vec3, f: Vec3, u: Vec3, t: f32) {
        self.set_target(p, f, u, t, 0.0);
        self.update(t);
    }

    /// Recompute the current pose for query time `t`.
    ///
    /// Clamps to the transition endpoints outside the interval, per
    /// [`Pose::interpolate`].
    pub fn update(&mut self, t: f32) {
        self.current.interpolate(&self.start, &self.end, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_new_tracker_is_default_pose() {
        let tracker = PoseTracker::new();
        assert_eq!(tracker.current().p, Vec3::ZERO);
        assert_eq!(tracker.current().f, Vec3::NEG_Z);
        assert_eq!(tracker.current().u, Vec3::Y);
    }

    #[test]
    fn test_transition_midpoint() {
        let mut tracker = PoseTracker::new();
        tracker.set_target(Vec3::new(10.0, 0.0, 0.0), Vec3::NEG_Z, Vec3::Y, 0.0, 10.0);

        tracker.update(5.0);
        assert!((tracker.current().p - Vec3::new(5.0, 0.0, 0.0)).length() < EPS);
        assert_eq!(tracker.current().t, 5.0);
    }

    #[test]
    fn test_update_before_transition_holds_start() {
        let mut tracker = PoseTracker::new();
        tracker.set_target(Vec3::X, Vec3::NEG_Z, Vec3::Y, 5.0, 10.0);

        tracker.update(2.0);
        assert_eq!(tracker.current().p, Vec3::ZERO);
    }

    #[test]
    fn test_update_past_transition_lands_on_target() {
        let mut tracker = PoseTracker::new();
        tracker.set_target(Vec3::new(3.0, 0.0, 0.0), Vec3::X, Vec3::Y, 0.0, 1.0);

        tracker.update(50.0);
        assert_eq!(tracker.current().p, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(tracker.current().f, Vec3::X);
    }

    #[test]
    fn test_retarget_starts_from_current_pose() {
        let mut tracker = PoseTracker::new();
        tracker.set_target(Vec3::new(10.0, 0.0, 0.0), Vec3::NEG_Z, Vec3::Y, 0.0, 10.0);
        tracker.update(5.0);

        // Retarget halfway through: the new transition must begin at the
        // interpolated position, not at either old endpoint.
        tracker.set_target(Vec3::new(5.0, 10.0, 0.0), Vec3::NEG_Z, Vec3::Y, 5.0, 10.0);
        tracker.update(10.0);
        assert!((tracker.current().p - Vec3::new(5.0, 5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_snap_is_immediate() {
        let mut tracker = PoseTracker::new();
        tracker.snap(Vec3::new(-2.0, 1.0, 4.0), Vec3::X, Vec3::Y, 3.0);
        assert_eq!(tracker.current().p, Vec3::new(-2.0, 1.0, 4.0));
        assert_eq!(tracker.current().f, Vec3::X);
    }

    #[test]
    fn test_zero_transition_time_jumps() {
        let mut tracker = PoseTracker::new();
        tracker.set_target(Vec3::Y, Vec3::NEG_Z, Vec3::Y, 1.0, 0.0);
        tracker.update(1.0);
        assert_eq!(tracker.current().p, Vec3::Y);
    }

    #[test]
    fn test_negative_transition_time_treated_as_zero() {
        let mut tracker = PoseTracker::new();
        tracker.set_target(Vec3::Z, Vec3::NEG_Z, Vec3::Y, 1.0, -3.0);
        tracker.update(1.0);
        assert_eq!(tracker.current().p, Vec3::Z);
    }
}
