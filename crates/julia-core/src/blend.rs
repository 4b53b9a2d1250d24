//! Eased blend between the Mandelbrot view (0) and the Julia view (1).

use crate::constants::BLEND_RATE_PER_SEC;

/// Which end of the blend the animation is heading for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendTarget {
    Mandelbrot,
    Julia,
}

impl BlendTarget {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Self::Mandelbrot => 0.0,
            Self::Julia => 1.0,
        }
    }
}

/// Linear blend progress. `factor` is always within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendState {
    pub factor: f64,
    pub target: BlendTarget,
}

impl BlendState {
    pub fn new(factor: f64, target: BlendTarget) -> Self {
        Self {
            factor: sanitize_factor(factor),
            target,
        }
    }
}

impl Default for BlendState {
    fn default() -> Self {
        Self::new(0.0, BlendTarget::Mandelbrot)
    }
}

#[inline]
fn sanitize_factor(factor: f64) -> f64 {
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}

/// Move `state.factor` toward `target` at the default rate.
#[inline]
pub fn advance(state: BlendState, target: BlendTarget, dt: f64) -> BlendState {
    advance_at_rate(state, target, dt, BLEND_RATE_PER_SEC)
}

/// Move `state.factor` toward `target` by `rate * dt`, clamped to `[0, 1]`.
///
/// Negative or non-finite `dt` counts as no elapsed time.
pub fn advance_at_rate(state: BlendState, target: BlendTarget, dt: f64, rate: f64) -> BlendState {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let step = rate * dt;
    let factor = match target {
        BlendTarget::Julia => state.factor + step,
        BlendTarget::Mandelbrot => state.factor - step,
    };
    BlendState::new(factor, target)
}

/// Cubic ease-in-out: `4t³` below one half, `1 - 4(1-t)³` above.
#[inline]
pub fn eased(factor: f64) -> f64 {
    let t = factor.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 4.0 * u * u * u
    }
}

/// Owns the blend state between ticks.
#[derive(Clone, Debug)]
pub struct BlendAnimator {
    state: BlendState,
    rate: f64,
}

impl BlendAnimator {
    pub fn new(initial_factor: f64, rate: f64) -> Self {
        Self {
            state: BlendState::new(initial_factor, BlendTarget::Mandelbrot),
            rate,
        }
    }

    pub fn advance(&mut self, target: BlendTarget, dt: f64) -> BlendState {
        self.state = advance_at_rate(self.state, target, dt, self.rate);
        self.state
    }

    #[inline]
    pub fn state(&self) -> BlendState {
        self.state
    }

    #[inline]
    pub fn eased(&self) -> f64 {
        eased(self.state.factor)
    }
}
