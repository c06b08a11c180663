use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// All elements matching `selector` under `root`; an invalid selector yields none.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(e) => {
            log::warn!("bad selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query_all_in_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(e) => {
            log::warn!("bad selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

fn collect_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<&web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {}={} failed: {:?}", property, value, e);
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str) {
    _ = el.class_list().toggle(class);
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("add {} listener failed: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    listen(el, "click", move |ev: web::MouseEvent| handler(ev));
}

/// One-shot `setTimeout`; returns the handle for `clearTimeout`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("setTimeout failed: {:?}", e);
            None
        }
    }
}

/// Resolve after `delay_ms`.
pub async fn sleep_ms(delay_ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Coalesces bursts of calls into one, run after `delay_ms` of quiet.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        if let (Some(w), Some(handle)) = (web::window(), self.pending.take()) {
            w.clear_timeout_with_handle(handle);
        }
        let pending = self.pending.clone();
        let handle = set_timeout(self.delay_ms, move || {
            pending.set(None);
            f();
        });
        self.pending.set(handle);
    }
}

/// Size the canvas backing store to its layout box; returns the new size.
pub fn sync_canvas_to_layout(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ObserveOptions<'a> {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'a str>,
}

/// Build an IntersectionObserver that calls `on_visible` for every target
/// that starts intersecting. Targets must be added with `observe`.
pub fn intersection_observer(
    options: ObserveOptions<'_>,
    mut on_visible: impl FnMut(web::Element, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    if let Some(t) = options.threshold {
        init.set_threshold(&JsValue::from_f64(t));
    }
    if let Some(m) = options.root_margin {
        init.set_root_margin(m);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    callback.forget();
    Ok(observer)
}
