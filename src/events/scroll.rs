use crate::core::MarqueeEngine;
use crate::dom;
use crate::events::EventSubscription;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Sample the page scroll position into the engine's velocity filter on
/// every scroll event. Decoupled from the frame loop: the integrator
/// consumes the smoothed velocity at its own cadence.
pub fn wire_scroll_observer(engine: Rc<RefCell<MarqueeEngine>>) -> Option<EventSubscription> {
    let window = web::window()?;
    let window_for_handler = window.clone();
    let sub = EventSubscription::listen(window.as_ref(), "scroll", move || {
        let scroll_y = window_for_handler.scroll_y().unwrap_or(0.0);
        engine
            .borrow_mut()
            .observe_scroll(scroll_y, dom::performance_now_ms());
    });
    Some(sub)
}
