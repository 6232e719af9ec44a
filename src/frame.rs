use crate::core::MarqueeEngine;
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-ticker state advanced once per animation frame.
pub struct FrameContext {
    pub engine: Rc<RefCell<MarqueeEngine>>,
    /// One scroller node per engine row, positioned directly each frame.
    pub scrollers: Vec<web::HtmlElement>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut engine = self.engine.borrow_mut();
        engine.tick(dt);
        for (i, scroller) in self.scrollers.iter().enumerate() {
            dom::set_translate_x(scroller, engine.row_offset(i));
        }
    }
}

/// Handle to a running requestAnimationFrame loop. Cancelling stops the
/// loop at the next pending frame, which also releases the closure.
pub struct FrameLoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoopHandle {
    let cancelled = Rc::new(Cell::new(false));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            // Break the self-referential cycle; wasm-bindgen defers the
            // actual free until this invocation returns.
            *tick_clone.borrow_mut() = None;
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
    FrameLoopHandle { cancelled }
}
