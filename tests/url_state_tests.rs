// Host-side tests for fragment formatting, parsing and echo suppression.

use julia_core::*;
use proptest::prelude::*;

#[test]
fn formats_as_comma_pair() {
    assert_eq!(lock_to_fragment(PlaneCoordinate::new(-0.75, 0.1)), "-0.75,0.1");
    assert_eq!(lock_to_fragment(PlaneCoordinate::new(1.0, -2.0)), "1,-2");
}

#[test]
fn parses_with_or_without_hash() {
    let expected = Some(PlaneCoordinate::new(-0.4, 0.6));
    assert_eq!(fragment_to_coord("-0.4,0.6"), expected);
    assert_eq!(fragment_to_coord("#-0.4,0.6"), expected);
    assert_eq!(fragment_to_coord(" -0.4 , 0.6 "), expected);
}

#[test]
fn malformed_fragments_are_none() {
    for bad in ["", "#", "abc", "1", "1,", ",2", "1,2,3", "1;2", "a,b", "inf,0", "0,-inf", "NaN,1"] {
        assert_eq!(fragment_to_coord(bad), None, "fragment {bad:?}");
    }
}

#[test]
fn own_write_is_not_a_navigation() {
    let mut sync = UrlStateSync::new();
    let fragment = sync.record_lock(PlaneCoordinate::new(0.25, -0.5));
    assert_eq!(sync.current(), Some(fragment.as_str()));
    assert_eq!(sync.accept_navigation(&fragment), None);
    assert_eq!(sync.accept_navigation(&format!("#{fragment}")), None);
}

#[test]
fn foreign_navigation_is_accepted_once() {
    let mut sync = UrlStateSync::new();
    assert_eq!(
        sync.accept_navigation("0.3,0.5"),
        Some(PlaneCoordinate::new(0.3, 0.5))
    );
    // Same fragment again is already reflected.
    assert_eq!(sync.accept_navigation("0.3,0.5"), None);
}

#[test]
fn returning_to_an_earlier_lock_is_accepted() {
    let mut sync = UrlStateSync::new();
    let first = sync.record_lock(PlaneCoordinate::new(0.1, 0.2));
    assert!(sync.accept_navigation("0.7,0.8").is_some());
    assert_eq!(
        sync.accept_navigation(&first),
        Some(PlaneCoordinate::new(0.1, 0.2))
    );
}

#[test]
fn unlock_clears_and_allows_history_back() {
    let mut sync = UrlStateSync::new();
    let fragment = sync.record_lock(PlaneCoordinate::new(0.1, 0.2));
    assert_eq!(sync.record_unlock(), "");
    assert_eq!(sync.current(), None);
    assert_eq!(sync.accept_navigation(""), None);
    assert!(sync.accept_navigation(&fragment).is_some());
}

#[test]
fn invalid_navigation_keeps_current() {
    let mut sync = UrlStateSync::new();
    let fragment = sync.record_lock(PlaneCoordinate::new(0.1, 0.2));
    assert_eq!(sync.accept_navigation("garbage"), None);
    assert_eq!(sync.current(), Some(fragment.as_str()));
}

proptest! {
    #[test]
    fn fragment_round_trips(re in -1e6f64..1e6, im in -1e6f64..1e6) {
        let coord = PlaneCoordinate::new(re, im);
        let parsed = fragment_to_coord(&lock_to_fragment(coord));
        prop_assert_eq!(parsed, Some(coord));
    }

    #[test]
    fn round_trips_any_finite_pair(re in any::<f64>(), im in any::<f64>()) {
        prop_assume!(re.is_finite() && im.is_finite());
        let coord = PlaneCoordinate::new(re, im);
        prop_assert_eq!(fragment_to_coord(&lock_to_fragment(coord)), Some(coord));
    }
}
