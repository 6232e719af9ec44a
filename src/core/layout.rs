/// Copies rendered while the copy width is still unmeasured (first paint,
/// or an empty strip). Small on purpose: re-measure runs right after.
pub const UNMEASURED_FALLBACK_COPIES: usize = 2;

/// Floor on the copy count once measured. Keeps short item sequences from
/// under-tiling wide viewports while staying light for card-style items;
/// plain-text hosts may pass a larger floor.
pub const DEFAULT_COPY_FLOOR: usize = 6;

/// Headroom over the widest of container/viewport. Roughly two viewports
/// of content so fast scroll-driven bursts never expose a gap at either
/// edge.
pub const COVERAGE_FACTOR: f64 = 2.0;

/// Output of the layout sizer: how wide one rendered copy of the item
/// sequence is, and how many identical copies to tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CopyLayout {
    pub copy_width_px: f64,
    pub copies: usize,
}

/// Compute the copy count that keeps the viewport covered in both travel
/// directions. Pure and idempotent; safe to call redundantly on every
/// resize event.
///
/// An unmeasured (or zero-width) copy yields a small safe fallback and a
/// zero width so the caller knows to re-measure on the next layout pass;
/// there is never a division by zero here.
pub fn compute_copy_layout(
    copy_width_px: f64,
    container_width_px: f64,
    viewport_width_px: f64,
    floor_copies: usize,
) -> CopyLayout {
    if copy_width_px <= 0.0 {
        return CopyLayout {
            copy_width_px: 0.0,
            copies: UNMEASURED_FALLBACK_COPIES,
        };
    }
    let effective = container_width_px.max(viewport_width_px).max(0.0);
    let min_copies = (effective * COVERAGE_FACTOR / copy_width_px).ceil() as usize;
    CopyLayout {
        copy_width_px,
        copies: min_copies.max(floor_copies).max(1),
    }
}
