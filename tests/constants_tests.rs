// Host-side tests for view constants and the default configuration.

use julia_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Zoom is a positive scale factor
    assert!(ZOOM > 0.0);

    // Blend rate: one full fade per second
    assert_eq!(BLEND_RATE_PER_SEC, 1.0);

    // Initial blend is a valid factor
    assert!((0.0..=1.0).contains(&INITIAL_BLEND));

    // Offset centers on the main body of the Mandelbrot set
    assert!(MANDELBROT_OFFSET[0] < 0.0 && MANDELBROT_OFFSET[0] > -2.0);
    assert_eq!(MANDELBROT_OFFSET[1], 0.0);
}

#[test]
fn default_config_uses_constants() {
    let config = ViewConfig::default();
    assert_eq!(config.zoom, ZOOM);
    assert_eq!(
        config.offset,
        PlaneCoordinate::new(MANDELBROT_OFFSET[0], MANDELBROT_OFFSET[1])
    );
    assert_eq!(config.blend_rate, BLEND_RATE_PER_SEC);
    assert_eq!(config.initial_blend, INITIAL_BLEND);
}

#[test]
fn dom_button_codes_are_distinct() {
    assert_ne!(BUTTON_PRIMARY, BUTTON_SECONDARY);
    assert_eq!(PointerButton::from_dom(BUTTON_PRIMARY), PointerButton::Primary);
    assert_eq!(
        PointerButton::from_dom(BUTTON_SECONDARY),
        PointerButton::Secondary
    );
}
