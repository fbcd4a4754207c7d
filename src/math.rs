//! Pure interpolation and coordinate-mapping utilities
//!
//! Stateless helpers shared by the camera, the renderer, and input
//! hit-testing. Everything here is a total function over its documented
//! domain: no I/O, no allocation, no panics.

use glam::Vec2;

/// Linear interpolation: `a + (b - a) * t`.
///
/// `t` is not restricted to `[0, 1]`; values outside extrapolate.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Two-sided clamp. If `min > max` the range is a caller error; this
/// implementation returns `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Hermite ease-in/ease-out between `edge0` and `edge1`.
///
/// Returns `t * t * (3 - 2t)` for `t = clamp((x - edge0) / (edge1 - edge0), 0, 1)`,
/// which has zero first derivative at both edges. `edge0 == edge1` is a
/// caller error (division by zero) and is not handled here.
#[inline]
pub fn smooth_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Map a world-space point to screen space for a camera at `camera_pos`
/// (top-left of the viewport, world units) with scale `zoom`.
#[inline]
pub fn world_to_screen(world: Vec2, camera_pos: Vec2, zoom: f32) -> Vec2 {
    (world - camera_pos) * zoom
}

/// Exact inverse of [`world_to_screen`]. `zoom` must be non-zero; the
/// camera's construction contract keeps it positive.
#[inline]
pub fn screen_to_world(screen: Vec2, camera_pos: Vec2, zoom: f32) -> Vec2 {
    screen / zoom + camera_pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lerp_endpoints_and_extrapolation() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
        // t outside [0,1] extrapolates rather than clamping
        assert_eq!(lerp(2.0, 10.0, 2.0), 18.0);
        assert_eq!(lerp(2.0, 10.0, -1.0), -6.0);
    }

    #[test]
    fn test_clamp_basic() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_range_returns_min() {
        // Documented behavior for the caller-error case
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_smooth_step_boundaries() {
        assert_eq!(smooth_step(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smooth_step(0.0, 1.0, 0.5), 0.5);
        // Clamped outside the edges
        assert_eq!(smooth_step(3.0, 7.0, 2.0), 0.0);
        assert_eq!(smooth_step(3.0, 7.0, 8.0), 1.0);
    }

    #[test]
    fn test_smooth_step_monotonic() {
        let mut prev = smooth_step(0.0, 1.0, 0.0);
        for i in 1..=100 {
            let x = i as f32 / 100.0;
            let y = smooth_step(0.0, 1.0, x);
            assert!(y >= prev, "smooth_step decreased at x={x}");
            prev = y;
        }
    }

    #[test]
    fn test_world_screen_mapping() {
        let cam = Vec2::new(100.0, 200.0);
        let screen = world_to_screen(Vec2::new(150.0, 250.0), cam, 2.0);
        assert_eq!(screen, Vec2::new(100.0, 100.0));
        let world = screen_to_world(screen, cam, 2.0);
        assert_eq!(world, Vec2::new(150.0, 250.0));
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            wx in -5000.0f32..5000.0,
            wy in -5000.0f32..5000.0,
            cx in -2000.0f32..2000.0,
            cy in -2000.0f32..2000.0,
            zoom in 0.1f32..8.0,
        ) {
            let world = Vec2::new(wx, wy);
            let cam = Vec2::new(cx, cy);
            let back = screen_to_world(world_to_screen(world, cam, zoom), cam, zoom);
            prop_assert!((back - world).length() < 1e-2);
        }

        #[test]
        fn prop_smooth_step_in_unit_range(
            e0 in -100.0f32..100.0,
            span in 0.001f32..200.0,
            x in -400.0f32..400.0,
        ) {
            let y = smooth_step(e0, e0 + span, x);
            prop_assert!((0.0..=1.0).contains(&y));
        }
    }
}
