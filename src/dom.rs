use crate::constants::{COPY_CLASS, ITEM_CLASS, PLACEHOLDER_CLASS, SCROLLER_CLASS};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn performance_now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Write the row offset straight onto the scroller node, bypassing any
/// retained-UI layer. Called once per animation frame.
#[inline]
pub fn set_translate_x(el: &web::HtmlElement, px: f64) {
    _ = el
        .style()
        .set_property("transform", &format!("translateX({px}px)"));
}

/// Create the scroller node the engine animates, as the sole child of the
/// container. Any previous content of the container is dropped.
pub fn build_scroller(
    document: &web::Document,
    container: &web::HtmlElement,
) -> Option<web::HtmlElement> {
    let scroller = create_div(document, SCROLLER_CLASS)?;
    container.set_text_content(None);
    _ = container.append_child(&scroller);
    Some(scroller)
}

/// Tile `copies` identical blocks of the item sequence under the scroller,
/// replacing whatever was there. The first block is the one the sizer
/// measures.
pub fn build_copies(
    document: &web::Document,
    scroller: &web::HtmlElement,
    items: &[String],
    copies: usize,
) {
    scroller.set_text_content(None);
    for _ in 0..copies {
        let Some(copy) = create_div(document, COPY_CLASS) else {
            return;
        };
        for item in items {
            if let Some(node) = create_div(document, ITEM_CLASS) {
                node.set_text_content(Some(item));
                _ = copy.append_child(&node);
            }
        }
        _ = scroller.append_child(&copy);
    }
}

/// Static single-row stand-in for an empty item sequence. No animation
/// runs over this content.
pub fn render_placeholder(document: &web::Document, scroller: &web::HtmlElement, text: &str) {
    scroller.set_text_content(None);
    if let Some(node) = create_div(document, PLACEHOLDER_CLASS) {
        node.set_text_content(Some(text));
        _ = scroller.append_child(&node);
    }
}

/// Width of one rendered copy block, 0 when nothing is rendered yet.
pub fn measure_copy_width(scroller: &web::HtmlElement) -> f64 {
    scroller
        .first_element_child()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| f64::from(el.offset_width()))
        .unwrap_or(0.0)
}

fn create_div(document: &web::Document, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}
