// Host-side tests for blend advance and easing.

use julia_core::*;
use proptest::prelude::*;

#[test]
fn full_transition_takes_one_second() {
    let mut s = BlendState::default();
    for _ in 0..10 {
        s = advance(s, BlendTarget::Julia, 0.1);
    }
    assert!((s.factor - 1.0).abs() < 1e-9);
    for _ in 0..5 {
        s = advance(s, BlendTarget::Mandelbrot, 0.1);
    }
    assert!((s.factor - 0.5).abs() < 1e-9);
}

#[test]
fn large_dt_clamps_instead_of_wrapping() {
    let s = advance(BlendState::default(), BlendTarget::Julia, 1e6);
    assert_eq!(s.factor, 1.0);
    let s = advance(s, BlendTarget::Mandelbrot, 1e6);
    assert_eq!(s.factor, 0.0);
}

#[test]
fn negative_dt_is_ignored() {
    let s = BlendState::new(0.4, BlendTarget::Julia);
    assert_eq!(advance(s, BlendTarget::Julia, -1.0).factor, 0.4);
}

#[test]
fn direction_comes_from_target_only() {
    let s = BlendState::new(0.5, BlendTarget::Julia);
    let s = advance(s, BlendTarget::Mandelbrot, 0.25);
    assert!((s.factor - 0.25).abs() < 1e-12);
    assert_eq!(s.target, BlendTarget::Mandelbrot);
}

#[test]
fn easing_boundaries() {
    assert_eq!(eased(0.0), 0.0);
    assert_eq!(eased(1.0), 1.0);
    assert_eq!(eased(0.5), 0.5);
}

#[test]
fn easing_is_monotonic_over_samples() {
    let mut prev = eased(0.0);
    for i in 1..20 {
        let t = i as f64 / 19.0;
        let v = eased(t);
        assert!(v >= prev, "eased({t}) = {v} < {prev}");
        prev = v;
    }
}

#[test]
fn easing_is_continuous_at_half() {
    let below = eased(0.5 - 1e-9);
    let above = eased(0.5 + 1e-9);
    assert!((above - below).abs() < 1e-6);
}

#[test]
fn animator_uses_configured_rate() {
    let mut animator = BlendAnimator::new(0.0, 2.0);
    animator.advance(BlendTarget::Julia, 0.25);
    assert!((animator.state().factor - 0.5).abs() < 1e-12);
    assert_eq!(animator.eased(), 0.5);
}

proptest! {
    #[test]
    fn factor_stays_in_unit_interval(
        steps in prop::collection::vec((0.0f64..5.0, any::<bool>()), 1..200),
        start in 0.0f64..=1.0,
    ) {
        let mut s = BlendState::new(start, BlendTarget::Mandelbrot);
        for (dt, to_julia) in steps {
            let target = if to_julia { BlendTarget::Julia } else { BlendTarget::Mandelbrot };
            s = advance(s, target, dt);
            prop_assert!((0.0..=1.0).contains(&s.factor), "factor {}", s.factor);
        }
    }
}
