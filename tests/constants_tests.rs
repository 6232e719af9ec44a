// Host-side sanity tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/core/layout.rs");
}
mod marquee {
    include!("../src/core/marquee.rs");
}

use constants::*;
use layout::*;
use marquee::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn filter_fractions_stay_in_unit_range() {
    // Raw constants are divided by 1000 before use.
    assert!(DEFAULT_STIFFNESS / 1000.0 > 0.0 && DEFAULT_STIFFNESS / 1000.0 <= 1.0);
    assert!(DEFAULT_DAMPING / 1000.0 > 0.0 && DEFAULT_DAMPING / 1000.0 < 1.0);
    // Damping lighter than stiffness, or the filter lags every gesture.
    assert!(DEFAULT_DAMPING < DEFAULT_STIFFNESS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn velocity_mapping_ranges_are_increasing() {
    assert!(DEFAULT_VELOCITY_INPUT[1] > DEFAULT_VELOCITY_INPUT[0]);
    assert!(DEFAULT_VELOCITY_OUTPUT[1] > DEFAULT_VELOCITY_OUTPUT[0]);
    assert!(DEFAULT_VELOCITY_INPUT[0] >= 0.0);
    assert!(DEFAULT_VELOCITY_OUTPUT[0] >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_over_provision() {
    // Headroom of at least two viewports keeps fast bursts gap-free.
    assert!(COVERAGE_FACTOR >= 2.0);
    assert!(DEFAULT_COPY_FLOOR >= UNMEASURED_FALLBACK_COPIES);
    assert!(UNMEASURED_FALLBACK_COPIES >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn base_velocity_is_sane() {
    assert!(DEFAULT_BASE_VELOCITY_PX_S > 0.0);
    // Base speed sits well inside the boost map's input range.
    assert!(DEFAULT_BASE_VELOCITY_PX_S < DEFAULT_VELOCITY_INPUT[1]);
}

#[test]
fn dom_wiring_constants_are_consistent() {
    for attr in [MARQUEE_ATTR, ITEMS_ATTR, VELOCITY_ATTR, PLACEHOLDER_ATTR] {
        assert!(attr.starts_with("data-"), "{attr} is not a data attribute");
    }
    let classes = [SCROLLER_CLASS, COPY_CLASS, ITEM_CLASS, PLACEHOLDER_CLASS];
    for (i, a) in classes.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &classes[i + 1..] {
            assert_ne!(a, b, "duplicate class name");
        }
    }
    assert!(LAYOUT_SETTLE_DELAY_MS > 0);
    assert!(!DEFAULT_PLACEHOLDER_TEXT.is_empty());
}
