//! Normalized interval projection.

/// Project `t` onto the interval `[start, end]`, returning its normalized
/// position within the interval.
///
/// Returns `0.0` at `t == start`, `1.0` at `t == end`, and extrapolates
/// linearly outside the interval. The result is not clamped.
///
/// A degenerate interval (`start == end`) divides by zero and yields NaN or
/// an infinity; callers are expected to gate on the interval first, the way
/// [`Pose::interpolate`](crate::Pose::interpolate) does.
#[inline]
#[must_use]
pub fn project(t: f32, start: f32, end: f32) -> f32 {
    (t - start) / (end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(project(2.0, 2.0, 6.0), 0.0);
        assert_eq!(project(6.0, 2.0, 6.0), 1.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(project(4.0, 2.0, 6.0), 0.5);
    }

    #[test]
    fn test_negative_interval_bounds() {
        assert_eq!(project(-5.0, -10.0, 0.0), 0.5);
    }

    #[test]
    fn test_extrapolates_outside_interval() {
        assert_eq!(project(8.0, 2.0, 6.0), 1.5);
        assert_eq!(project(0.0, 2.0, 6.0), -0.5);
    }

    #[test]
    fn test_degenerate_interval_is_not_finite() {
        assert!(!project(5.0, 5.0, 5.0).is_finite());
        assert!(!project(7.0, 5.0, 5.0).is_finite());
    }
}
