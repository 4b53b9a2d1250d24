//! Viewport pixels to complex-plane coordinates.
//!
//! Pixel inputs are CSS pixels as reported by DOM events. Device pixel ratio
//! only matters when talking to the renderer, so it never enters the mapping.

use std::ops::{Add, AddAssign, Mul};

/// CSS-pixel size of the viewport plus its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl ViewportGeometry {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Backing-store size in physical pixels.
    #[inline]
    pub fn resolution_px(&self) -> [f64; 2] {
        [
            self.width * self.device_pixel_ratio,
            self.height * self.device_pixel_ratio,
        ]
    }
}

/// Supplies the current viewport geometry on demand.
///
/// Read lazily on every mapping call; implementors are free to query the
/// platform each time.
pub trait ViewportSource {
    fn geometry(&self) -> ViewportGeometry;
}

impl ViewportSource for ViewportGeometry {
    fn geometry(&self) -> ViewportGeometry {
        *self
    }
}

/// A point `(re, im)` in the complex plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneCoordinate {
    pub re: f64,
    pub im: f64,
}

impl PlaneCoordinate {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for PlaneCoordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl AddAssign for PlaneCoordinate {
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Mul<f64> for PlaneCoordinate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

/// Map an absolute viewport position to the plane.
///
/// - recenters on the viewport midpoint
/// - divides by `max(width, height)` so the mapping is resolution independent
/// - divides by `zoom`, then translates by `offset`
///
/// The viewport must be realized (non-zero width and height).
#[inline]
pub fn to_plane(
    viewport: &ViewportGeometry,
    zoom: f64,
    offset: PlaneCoordinate,
    x: f64,
    y: f64,
) -> PlaneCoordinate {
    let centered_x = x - viewport.width / 2.0;
    let centered_y = y - viewport.height / 2.0;
    to_plane_delta(viewport, zoom, centered_x, centered_y) + offset
}

/// Map a pixel delta to a plane delta (no recentering, no offset).
#[inline]
pub fn to_plane_delta(viewport: &ViewportGeometry, zoom: f64, dx: f64, dy: f64) -> PlaneCoordinate {
    debug_assert!(
        viewport.width > 0.0 && viewport.height > 0.0,
        "mapping against an unrealized viewport"
    );
    debug_assert!(zoom > 0.0);
    let max_side = viewport.max_side();
    PlaneCoordinate::new(dx / max_side / zoom, dy / max_side / zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_maps_to_offset() {
        let vp = ViewportGeometry::new(800.0, 600.0, 2.0);
        let offset = PlaneCoordinate::new(-0.75, 0.0);
        let p = to_plane(&vp, 0.2, offset, 400.0, 300.0);
        assert_eq!(p, offset);
    }

    #[test]
    fn longer_side_spans_one_over_zoom() {
        let vp = ViewportGeometry::new(1000.0, 500.0, 1.0);
        let left = to_plane(&vp, 0.2, PlaneCoordinate::default(), 0.0, 250.0);
        let right = to_plane(&vp, 0.2, PlaneCoordinate::default(), 1000.0, 250.0);
        assert!((right.re - left.re - 5.0).abs() < 1e-12);
        assert_eq!(left.im, 0.0);
    }

    #[test]
    fn device_pixel_ratio_does_not_affect_mapping() {
        let a = ViewportGeometry::new(640.0, 480.0, 1.0);
        let b = ViewportGeometry::new(640.0, 480.0, 3.0);
        let offset = PlaneCoordinate::new(-0.75, 0.0);
        assert_eq!(
            to_plane(&a, 0.2, offset, 10.0, 20.0),
            to_plane(&b, 0.2, offset, 10.0, 20.0)
        );
    }
}
