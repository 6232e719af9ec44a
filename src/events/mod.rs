pub mod resize;
pub mod scroll;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that is removed again when the subscription is
/// dropped. Mounted tickers hold these so unmount tears the listeners
/// down instead of leaking forgotten closures.
pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut()>>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut() + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}
