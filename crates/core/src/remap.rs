//! Linear remapping helpers shared by the noise core and the renderers.
//!
//! None of these clamp unless the name says so, and none guard against a
//! zero-width source range: `map_range(v, 1.0, 1.0, ..)` divides by zero.

/// Re-maps `value` from `[start1, stop1]` to `[start2, stop2]`.
pub fn map_range(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    let ratio = (value - start1) / (stop1 - start1);
    start2 + (stop2 - start2) * ratio
}

/// Position of `value` within `[start, stop]` as a fraction (0 at `start`,
/// 1 at `stop`).
pub fn norm(value: f64, start: f64, stop: f64) -> f64 {
    (value - start) / (stop - start)
}

/// `start + (stop - start) * amt`. Exact at `amt == 0`.
pub fn lerp(start: f64, stop: f64, amt: f64) -> f64 {
    start + (stop - start) * amt
}

/// Clamps `n` to `[low, high]`.
///
/// Unlike [`f64::clamp`] this never panics when `low > high`; the lower
/// bound is checked first.
pub fn constrain(n: f64, low: f64, high: f64) -> f64 {
    if n < low {
        low
    } else if n > high {
        high
    } else {
        n
    }
}

/// Euclidean distance between two points.
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_maps_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 1.0, 10.0, 30.0), 10.0);
        assert_eq!(map_range(1.0, 0.0, 1.0, 10.0, 30.0), 30.0);
        assert_eq!(map_range(0.5, 0.0, 1.0, 10.0, 30.0), 20.0);
    }

    #[test]
    fn map_range_extrapolates() {
        assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_eq!(map_range(-1.0, -1.0, 1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn map_range_handles_inverted_target() {
        assert_eq!(map_range(0.25, 0.0, 1.0, 1.0, 0.0), 0.75);
    }

    #[test]
    fn map_range_zero_width_source_is_not_finite() {
        assert!(!map_range(0.5, 1.0, 1.0, 0.0, 1.0).is_finite());
    }

    #[test]
    fn norm_is_fraction_of_range() {
        assert_eq!(norm(15.0, 10.0, 20.0), 0.5);
        assert_eq!(norm(10.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn lerp_is_exact_at_zero() {
        assert_eq!(lerp(0.3, 123.4, 0.0), 0.3);
        assert_eq!(lerp(-2.0, 2.0, 0.5), 0.0);
    }

    #[test]
    fn constrain_clamps_both_sides() {
        assert_eq!(constrain(-5.0, 1.0, 10.0), 1.0);
        assert_eq!(constrain(50.0, 1.0, 10.0), 10.0);
        assert_eq!(constrain(5.0, 1.0, 10.0), 5.0);
    }

    #[test]
    fn constrain_with_inverted_bounds_does_not_panic() {
        assert_eq!(constrain(5.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn dist_is_pythagorean() {
        assert_eq!(dist(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(dist(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn map_range_then_back_is_identity(
                v in -1e3_f64..1e3,
                a in -1e3_f64..1e3,
                span in 1.0_f64..1e3,
            ) {
                let b = a + span;
                let mapped = map_range(v, a, b, 0.0, 1.0);
                let back = map_range(mapped, 0.0, 1.0, a, b);
                prop_assert!((back - v).abs() < 1e-6, "{v} -> {mapped} -> {back}");
            }

            #[test]
            fn constrain_stays_in_bounds(n in -1e6_f64..1e6, low in -100.0_f64..0.0, high in 0.0_f64..100.0) {
                let c = constrain(n, low, high);
                prop_assert!(c >= low && c <= high);
            }
        }
    }
}
