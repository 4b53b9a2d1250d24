use crate::constants::{BLEND_RATE_PER_SEC, INITIAL_BLEND, MANDELBROT_OFFSET, ZOOM};
use crate::coords::PlaneCoordinate;

/// Tunables for mapping and blending, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    pub zoom: f64,
    pub offset: PlaneCoordinate,
    /// Linear blend progress per second.
    pub blend_rate: f64,
    pub initial_blend: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom: ZOOM,
            offset: PlaneCoordinate::new(MANDELBROT_OFFSET[0], MANDELBROT_OFFSET[1]),
            blend_rate: BLEND_RATE_PER_SEC,
            initial_blend: INITIAL_BLEND,
        }
    }
}
