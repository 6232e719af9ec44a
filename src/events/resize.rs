use crate::events::EventSubscription;
use std::rc::Rc;
use web_sys as web;

/// Re-run the layout sizer on every viewport resize. The sizer is
/// idempotent, so resize storms are safe to replay unconditionally.
pub fn wire_resize(relayout: Rc<dyn Fn()>) -> Option<EventSubscription> {
    let window = web::window()?;
    let sub = EventSubscription::listen(window.as_ref(), "resize", move || relayout());
    Some(sub)
}
