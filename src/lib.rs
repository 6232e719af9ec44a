#![cfg(target_arch = "wasm32")]
use crate::constants::{
    DEFAULT_PLACEHOLDER_TEXT, ITEMS_ATTR, LAYOUT_SETTLE_DELAY_MS, MARQUEE_ATTR, PLACEHOLDER_ATTR,
    VELOCITY_ATTR,
};
use crate::core::{compute_copy_layout, MarqueeEngine, MarqueeParams, DEFAULT_COPY_FLOOR};
use crate::events::EventSubscription;
use crate::frame::{FrameContext, FrameLoopHandle};
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;

thread_local! {
    // One handle per container id. Single-threaded wasm, so a plain
    // thread-local map is the whole registry.
    static TICKERS: RefCell<FnvHashMap<String, TickerHandle>> =
        RefCell::new(FnvHashMap::default());
}

/// Everything one mounted ticker owns. Dropping (or disposing) a handle
/// cancels the frame loop, removes the listeners and clears any pending
/// settle timer, so unmounted tickers leave nothing running.
struct TickerHandle {
    container: web::HtmlElement,
    params: MarqueeParams,
    placeholder: String,
    loop_handle: Option<FrameLoopHandle>,
    subscriptions: Vec<EventSubscription>,
    settle_timer: Option<i32>,
    // Kept alive until the timer has fired or been cleared.
    settle_closure: Option<Closure<dyn FnMut()>>,
}

impl TickerHandle {
    fn dispose(&mut self) {
        if let Some(h) = self.loop_handle.take() {
            h.cancel();
        }
        self.subscriptions.clear();
        if let Some(id) = self.settle_timer.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
        self.settle_closure = None;
        self.container.set_text_content(None);
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Shared by the relayout closure, the resize listener and the settle
/// timer. Re-measures one copy and retiles the strip when the required
/// copy count changes.
struct TickerParts {
    engine: Rc<RefCell<MarqueeEngine>>,
    container: web::HtmlElement,
    scroller: web::HtmlElement,
    items: Vec<String>,
    copies_built: RefCell<usize>,
}

fn relayout(parts: &TickerParts) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let copy_width = dom::measure_copy_width(&parts.scroller);
    let container_width = f64::from(parts.container.offset_width());
    let layout = compute_copy_layout(
        copy_width,
        container_width,
        dom::viewport_width(),
        DEFAULT_COPY_FLOOR,
    );
    if layout.copies != *parts.copies_built.borrow() {
        dom::build_copies(&document, &parts.scroller, &parts.items, layout.copies);
        *parts.copies_built.borrow_mut() = layout.copies;
    }
    parts
        .engine
        .borrow_mut()
        .set_copy_layout(0, layout.copy_width_px, layout.copies);
    log::info!(
        "[layout] copy_width={:.1}px copies={}",
        layout.copy_width_px,
        layout.copies
    );
}

fn mount_element(
    document: &web::Document,
    container: web::HtmlElement,
    items: Vec<String>,
    params: MarqueeParams,
    placeholder: String,
) -> anyhow::Result<TickerHandle> {
    let scroller = dom::build_scroller(document, &container)
        .ok_or_else(|| anyhow::anyhow!("could not create scroller node"))?;

    if items.is_empty() {
        // Static placeholder row; the integrator never starts.
        dom::render_placeholder(document, &scroller, &placeholder);
        log::info!("[mount] empty item list, placeholder only");
        return Ok(TickerHandle {
            container,
            params,
            placeholder,
            loop_handle: None,
            subscriptions: Vec::new(),
            settle_timer: None,
            settle_closure: None,
        });
    }

    // Tile a conservative copy count right away so the first frames have
    // no gap, then measure for real once layout has settled.
    dom::build_copies(document, &scroller, &items, DEFAULT_COPY_FLOOR);

    let engine = Rc::new(RefCell::new(MarqueeEngine::new(params.clone(), 1)));
    let parts = Rc::new(TickerParts {
        engine: engine.clone(),
        container: container.clone(),
        scroller: scroller.clone(),
        items,
        copies_built: RefCell::new(DEFAULT_COPY_FLOOR),
    });

    let parts_for_relayout = parts.clone();
    let relayout_fn: Rc<dyn Fn()> = Rc::new(move || relayout(&parts_for_relayout));

    let relayout_for_timer = relayout_fn.clone();
    let settle_closure =
        Closure::wrap(Box::new(move || relayout_for_timer()) as Box<dyn FnMut()>);
    let settle_timer = web::window().and_then(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(
            settle_closure.as_ref().unchecked_ref(),
            LAYOUT_SETTLE_DELAY_MS,
        )
        .ok()
    });

    let mut subscriptions = Vec::new();
    subscriptions.extend(events::scroll::wire_scroll_observer(engine.clone()));
    subscriptions.extend(events::resize::wire_resize(relayout_fn));

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        engine,
        scrollers: vec![scroller],
        last_instant: Instant::now(),
    }));
    let loop_handle = frame::start_loop(frame_ctx);
    log::info!("[mount] ticker running ({} items)", parts.items.len());

    Ok(TickerHandle {
        container,
        params,
        placeholder,
        loop_handle: Some(loop_handle),
        subscriptions,
        settle_timer,
        settle_closure: Some(settle_closure),
    })
}

fn items_from_js(items: &js_sys::Array) -> Vec<String> {
    items.iter().filter_map(|v| v.as_string()).collect()
}

fn container_by_id(container_id: &str) -> anyhow::Result<(web::Document, web::HtmlElement)> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{container_id}"))?;
    let el = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{container_id} is not an HTML element"))?;
    Ok((document, el))
}

fn to_js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Mount a ticker into the element with the given id. Items are the
/// opaque strings to tile; an empty list renders the placeholder.
#[wasm_bindgen]
pub fn mount_ticker(
    container_id: &str,
    items: js_sys::Array,
    base_velocity: Option<f64>,
) -> Result<(), JsValue> {
    let (document, el) = container_by_id(container_id).map_err(to_js_err)?;
    let mut params = MarqueeParams::default();
    if let Some(v) = base_velocity {
        params.base_velocity_px_s = v;
    }
    let handle = mount_element(
        &document,
        el,
        items_from_js(&items),
        params,
        DEFAULT_PLACEHOLDER_TEXT.to_string(),
    )
    .map_err(to_js_err)?;
    TICKERS.with(|t| {
        // Replacing an existing mount disposes the old one first.
        t.borrow_mut().insert(container_id.to_string(), handle);
    });
    Ok(())
}

/// Replace the item sequence of a mounted ticker and re-run layout.
#[wasm_bindgen]
pub fn set_ticker_items(container_id: &str, items: js_sys::Array) -> Result<(), JsValue> {
    let (params, placeholder) = TICKERS
        .with(|t| {
            // Dropping the old handle tears the old mount down.
            t.borrow_mut()
                .remove(container_id)
                .map(|h| (h.params.clone(), h.placeholder.clone()))
        })
        .ok_or_else(|| JsValue::from_str(&format!("#{container_id} is not mounted")))?;
    let (document, el) = container_by_id(container_id).map_err(to_js_err)?;
    let handle =
        mount_element(&document, el, items_from_js(&items), params, placeholder).map_err(to_js_err)?;
    TICKERS.with(|t| {
        t.borrow_mut().insert(container_id.to_string(), handle);
    });
    Ok(())
}

/// Tear a ticker down: frame loop, listeners, timers and built DOM all go.
/// Returns false when nothing was mounted under that id.
#[wasm_bindgen]
pub fn unmount_ticker(container_id: &str) -> bool {
    let removed = TICKERS.with(|t| t.borrow_mut().remove(container_id));
    if removed.is_some() {
        log::info!("[unmount] #{container_id}");
        true
    } else {
        false
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ticker-web starting");

    spawn_local(async move {
        if let Err(e) = auto_mount() {
            log::error!("auto-mount error: {e:?}");
        }
    });
    Ok(())
}

/// Mount every `[data-marquee]` element on the page, reading items and
/// tuning from data attributes so the host page needs no JS glue.
fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all(&format!("[{MARQUEE_ATTR}]"))
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let id = el.id();
        if id.is_empty() {
            log::warn!("[auto-mount] skipping {MARQUEE_ATTR} element without id");
            continue;
        }

        let items = el
            .get_attribute(ITEMS_ATTR)
            .map(|json| parse_items_attr(&id, &json))
            .unwrap_or_default();
        let mut params = MarqueeParams::default();
        if let Some(v) = el.get_attribute(VELOCITY_ATTR).and_then(|s| s.parse().ok()) {
            params.base_velocity_px_s = v;
        }
        let placeholder = el
            .get_attribute(PLACEHOLDER_ATTR)
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER_TEXT.to_string());

        match mount_element(&document, el, items, params, placeholder) {
            Ok(handle) => {
                TICKERS.with(|t| {
                    t.borrow_mut().insert(id, handle);
                });
            }
            Err(e) => log::warn!("[auto-mount] #{id}: {e}"),
        }
    }
    Ok(())
}

fn parse_items_attr(id: &str, json: &str) -> Vec<String> {
    match js_sys::JSON::parse(json) {
        Ok(v) if js_sys::Array::is_array(&v) => items_from_js(&js_sys::Array::from(&v)),
        _ => {
            log::warn!("[auto-mount] #{id}: {ITEMS_ATTR} is not a JSON array");
            Vec::new()
        }
    }
}
