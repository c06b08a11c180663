use crate::core::NOTIFICATION_CSS;
use crate::dom;
use crate::selectors::LOADED_CLASS;
use web_sys as web;

/// Append the notification and field-validation rules to `<head>`.
pub fn inject_styles(document: &web::Document) -> anyhow::Result<()> {
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no head"))?;
    let style = document.create_element("style").map_err(dom::js_err)?;
    style.set_text_content(Some(NOTIFICATION_CSS));
    head.append_child(&style).map_err(dom::js_err)?;
    Ok(())
}

/// Mark the body as loaded once every resource is in, and log how long that took.
pub fn wire_loaded(window: &web::Window, document: &web::Document) {
    if document.ready_state() == "complete" {
        mark_loaded(window, document);
        return;
    }
    let doc = document.clone();
    let w = window.clone();
    dom::listen(window, "load", move |_: web::Event| mark_loaded(&w, &doc));
}

fn mark_loaded(window: &web::Window, document: &web::Document) {
    if let Some(body) = document.body() {
        dom::add_class(&body, LOADED_CLASS);
    }
    if let Some(perf) = window.performance() {
        log::info!("page loaded in {:.0}ms", perf.now());
    }
}

pub fn set_current_year(el: &web::Element) {
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
}
