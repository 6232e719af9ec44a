/// Host-side wiring constants: element attributes, class names and the
/// measurement settle delay. Engine tuning lives in `core::marquee` and
/// `core::layout`; everything here is cosmetic or DOM plumbing.
// Elements carrying this attribute are mounted automatically at start.
pub const MARQUEE_ATTR: &str = "data-marquee";
// JSON array of item strings.
pub const ITEMS_ATTR: &str = "data-items";
// Optional base velocity override, px/s.
pub const VELOCITY_ATTR: &str = "data-velocity";
// Optional placeholder override for empty item lists.
pub const PLACEHOLDER_ATTR: &str = "data-placeholder";

// Classes applied to built nodes so the page styles the strip.
pub const SCROLLER_CLASS: &str = "marquee-scroller";
pub const COPY_CLASS: &str = "marquee-copy";
pub const ITEM_CLASS: &str = "marquee-item";
pub const PLACEHOLDER_CLASS: &str = "marquee-placeholder";

// Shown when the item sequence is empty and no override is set.
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Nothing to show here yet";

// First measurement is deferred this long after mount so fonts and
// layout settle before offsetWidth is read.
pub const LAYOUT_SETTLE_DELAY_MS: i32 = 100;
