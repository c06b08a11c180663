#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod core;
mod dom;
mod effects;
mod frame;
mod selectors;

use effects::{CursorMarkers, NavElements};

fn html(el: Option<web::Element>) -> Option<web::HtmlElement> {
    el.and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

fn html_all(els: Vec<web::Element>) -> Vec<web::HtmlElement> {
    els.into_iter()
        .filter_map(|e| e.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

fn mount_particles(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(selectors::PARTICLES_CANVAS_ID) else {
        log::debug!("[particles] no canvas, skipped");
        return Ok(());
    };
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", selectors::PARTICLES_CANVAS_ID, e))?;
    effects::particles::mount(document, canvas)
}

fn mount_cursor(document: &web::Document) {
    let dot = html(dom::query_one(document, selectors::CURSOR_DOT));
    let outline = html(dom::query_one(document, selectors::CURSOR_OUTLINE));
    let (Some(dot), Some(outline)) = (dot, outline) else {
        log::debug!("[cursor] markers missing, skipped");
        return;
    };
    let hover_targets = dom::query_all_in_document(document, selectors::CURSOR_HOVER_TARGETS);
    effects::cursor::mount(document, CursorMarkers { dot, outline }, hover_targets);
}

fn mount_reveal(document: &web::Document) -> anyhow::Result<()> {
    effects::reveal::mount(
        dom::query_all_in_document(document, selectors::REVEAL),
        dom::query_all_in_document(document, selectors::SECTIONS),
        selectors::SECTION_AUTO_REVEAL,
    )
}

fn mount_typing(document: &web::Document) {
    match dom::query_one(document, selectors::TYPING_TEXT) {
        Some(el) => effects::typing::mount(el),
        None => log::debug!("[typing] no typing text, skipped"),
    }
}

fn mount_counters(document: &web::Document) -> anyhow::Result<()> {
    let counters = dom::query_all_in_document(document, selectors::COUNTERS);
    if counters.is_empty() {
        return Ok(());
    }
    effects::counters::mount(counters)
}

fn mount_nav(window: &web::Window, document: &web::Document) {
    let els = NavElements {
        nav: html(document.get_element_by_id(selectors::NAV_ID)),
        toggle: document.get_element_by_id(selectors::NAV_TOGGLE_ID),
        links: dom::query_all_in_document(document, selectors::NAV_LINKS),
        sections: effects::nav::html_sections(dom::query_all_in_document(
            document,
            selectors::NAV_SECTIONS,
        )),
        body: document.body(),
    };
    effects::nav::mount(window, els);
}

fn mount_form(document: &web::Document) {
    let form = document
        .get_element_by_id(selectors::CONTACT_FORM_ID)
        .and_then(|e| e.dyn_into::<web::HtmlFormElement>().ok());
    let Some(form) = form else {
        log::debug!("[form] no contact form, skipped");
        return;
    };
    let fields = dom::query_all(&form, selectors::FORM_FIELDS);
    let submit = form.query_selector(selectors::SUBMIT_BUTTON).ok().flatten();
    effects::form::mount(document, form, fields, submit);
}

fn mount_parallax(window: &web::Window, document: &web::Document) {
    effects::parallax::mount(
        window,
        html_all(dom::query_all_in_document(document, selectors::PARALLAX)),
        html_all(dom::query_all_in_document(document, selectors::FLOATING_CARDS)),
    );
}

/// Mount every effect. Each one only touches the elements handed to it and
/// skips itself when they are absent, so one failure doesn't stop the rest.
fn mount_all(window: &web::Window, document: &web::Document) {
    let fallible: [(&str, fn(&web::Document) -> anyhow::Result<()>); 3] = [
        ("particles", mount_particles),
        ("reveal", mount_reveal),
        ("counters", mount_counters),
    ];
    for (name, mount) in fallible {
        if let Err(e) = mount(document) {
            log::error!("[{}] init error: {:?}", name, e);
        }
    }
    mount_cursor(document);
    mount_typing(document);
    effects::scroll::mount(
        document,
        dom::query_all_in_document(document, selectors::IN_PAGE_ANCHORS),
    );
    mount_nav(window, document);
    mount_form(document);
    mount_parallax(window, document);
    if let Some(el) = document.get_element_by_id(selectors::CURRENT_YEAR_ID) {
        effects::chrome::set_current_year(&el);
    }
    log::info!("effects mounted");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = effects::chrome::inject_styles(&document) {
        log::warn!("style injection failed: {:?}", e);
    }
    effects::chrome::wire_loaded(&window, &document);

    if document.ready_state() == "loading" {
        let w = window.clone();
        let doc = document.clone();
        let mut mounted = false;
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
            if !std::mem::replace(&mut mounted, true) {
                mount_all(&w, &doc);
            }
        });
    } else {
        mount_all(&window, &document);
    }
    Ok(())
}
