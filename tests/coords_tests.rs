// Host-side tests for viewport -> plane mapping.

use julia_core::*;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn close(a: PlaneCoordinate, b: PlaneCoordinate) -> bool {
    (a.re - b.re).abs() < EPS && (a.im - b.im).abs() < EPS
}

#[test]
fn corners_map_symmetrically_around_offset() {
    let vp = ViewportGeometry::new(1000.0, 1000.0, 1.0);
    let offset = PlaneCoordinate::new(-0.75, 0.0);
    let top_left = to_plane(&vp, 0.2, offset, 0.0, 0.0);
    let bottom_right = to_plane(&vp, 0.2, offset, 1000.0, 1000.0);

    assert!(close(top_left, PlaneCoordinate::new(-0.75 - 2.5, -2.5)));
    assert!(close(bottom_right, PlaneCoordinate::new(-0.75 + 2.5, 2.5)));
}

#[test]
fn portrait_viewport_uses_height_as_scale() {
    let vp = ViewportGeometry::new(400.0, 800.0, 2.0);
    let d = to_plane_delta(&vp, 0.2, 800.0, 0.0);
    assert!((d.re - 5.0).abs() < EPS);
    assert_eq!(d.im, 0.0);
}

#[test]
fn delta_has_no_offset() {
    let vp = ViewportGeometry::new(640.0, 480.0, 1.0);
    assert_eq!(to_plane_delta(&vp, 0.2, 0.0, 0.0), PlaneCoordinate::default());
}

#[test]
fn absolute_difference_equals_delta() {
    let vp = ViewportGeometry::new(1280.0, 720.0, 1.5);
    let offset = PlaneCoordinate::new(-0.75, 0.0);
    let a = to_plane(&vp, 0.2, offset, 100.0, 200.0);
    let b = to_plane(&vp, 0.2, offset, 130.0, 180.0);
    let d = to_plane_delta(&vp, 0.2, 30.0, -20.0);
    assert!(close(a + d, b));
}

#[test]
fn viewport_resolution_applies_device_pixel_ratio() {
    let vp = ViewportGeometry::new(800.0, 600.0, 2.0);
    assert_eq!(vp.resolution_px(), [1600.0, 1200.0]);
    assert_eq!(vp.geometry(), vp);
}

proptest! {
    #[test]
    fn mapping_is_resolution_independent(
        w in 1.0f64..4000.0,
        h in 1.0f64..4000.0,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
        scale in 0.25f64..8.0,
    ) {
        let offset = PlaneCoordinate::new(-0.75, 0.0);
        let small = ViewportGeometry::new(w, h, 1.0);
        let large = ViewportGeometry::new(w * scale, h * scale, 1.0);
        let a = to_plane(&small, 0.2, offset, fx * w, fy * h);
        let b = to_plane(&large, 0.2, offset, fx * w * scale, fy * h * scale);
        prop_assert!((a.re - b.re).abs() < 1e-9, "re {} vs {}", a.re, b.re);
        prop_assert!((a.im - b.im).abs() < 1e-9, "im {} vs {}", a.im, b.im);
    }
}
