// Host-side tests for the layout sizer.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod layout {
    include!("../src/core/layout.rs");
}

use layout::*;

#[test]
fn coverage_invariant_holds_after_sizing() {
    let cases = [
        // (copy_width, container, viewport)
        (120.0, 800.0, 1440.0),
        (300.0, 1000.0, 800.0),
        (640.0, 640.0, 640.0),
        (37.5, 1920.0, 1920.0),
        (2000.0, 390.0, 390.0),
    ];
    for (copy_width, container, viewport) in cases {
        let layout = compute_copy_layout(copy_width, container, viewport, DEFAULT_COPY_FLOOR);
        let covered = layout.copies as f64 * layout.copy_width_px;
        let needed = COVERAGE_FACTOR * container.max(viewport);
        assert!(
            covered >= needed,
            "under-provisioned: {covered} < {needed} for copy_width {copy_width}"
        );
    }
}

#[test]
fn unmeasured_copy_falls_back_without_dividing() {
    for copy_width in [0.0, -5.0] {
        let layout = compute_copy_layout(copy_width, 1200.0, 1440.0, DEFAULT_COPY_FLOOR);
        assert_eq!(layout.copies, UNMEASURED_FALLBACK_COPIES);
        assert_eq!(layout.copy_width_px, 0.0);
    }
}

#[test]
fn floor_applies_when_copies_are_wide() {
    // One copy already spans twice the viewport; the floor still wins.
    let layout = compute_copy_layout(5000.0, 800.0, 1000.0, DEFAULT_COPY_FLOOR);
    assert_eq!(layout.copies, DEFAULT_COPY_FLOOR);
    assert_eq!(layout.copy_width_px, 5000.0);
}

#[test]
fn narrow_copies_round_up_not_down() {
    // 2 * 1000 / 300 = 6.67 copies -> 7, never 6.
    let layout = compute_copy_layout(300.0, 800.0, 1000.0, DEFAULT_COPY_FLOOR);
    assert_eq!(layout.copies, 7);
}

#[test]
fn wider_of_container_and_viewport_governs() {
    let by_container = compute_copy_layout(100.0, 3000.0, 1000.0, DEFAULT_COPY_FLOOR);
    let by_viewport = compute_copy_layout(100.0, 1000.0, 3000.0, DEFAULT_COPY_FLOOR);
    assert_eq!(by_container.copies, 60);
    assert_eq!(by_viewport.copies, 60);
}

#[test]
fn sizing_is_idempotent_under_resize_storms() {
    let first = compute_copy_layout(250.0, 1100.0, 1440.0, DEFAULT_COPY_FLOOR);
    for _ in 0..100 {
        assert_eq!(
            compute_copy_layout(250.0, 1100.0, 1440.0, DEFAULT_COPY_FLOOR),
            first
        );
    }
}

#[test]
fn degenerate_widths_still_yield_at_least_one_copy() {
    // Zero-width container and viewport: nothing to cover, floor of 1.
    let layout = compute_copy_layout(100.0, 0.0, 0.0, 0);
    assert!(layout.copies >= 1);
}
