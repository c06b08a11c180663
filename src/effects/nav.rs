use crate::core::nav::{
    active_section, link_targets_section, nav_background, nav_transform, SectionOffset, NAV_BLUR,
};
use crate::dom;
use crate::selectors::{ACTIVE_CLASS, NAV_OPEN_CLASS, NO_SCROLL_CLASS};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct NavElements {
    pub nav: Option<web::HtmlElement>,
    pub toggle: Option<web::Element>,
    pub links: Vec<web::Element>,
    pub sections: Vec<web::HtmlElement>,
    pub body: Option<web::HtmlElement>,
}

#[inline]
fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn wire_bar_style(window: &web::Window, nav: web::HtmlElement) {
    let last_scroll_y = Rc::new(Cell::new(scroll_y(window)));
    let w = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let current = scroll_y(&w);
        let viewport = w
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        dom::set_style(&nav, "background", nav_background(current));
        dom::set_style(&nav, "backdrop-filter", NAV_BLUR);
        dom::set_style(
            &nav,
            "transform",
            nav_transform(current, last_scroll_y.get(), viewport),
        );
        last_scroll_y.set(current);
    });
}

fn wire_active_link(window: &web::Window, links: Vec<web::Element>, sections: Vec<web::HtmlElement>) {
    let w = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        // Offsets are read on every scroll since layout may shift after load.
        let offsets: Vec<SectionOffset> = sections
            .iter()
            .map(|s| SectionOffset {
                id: s.id(),
                top: s.offset_top() as f64,
            })
            .collect();
        let current = active_section(scroll_y(&w), &offsets);
        for link in &links {
            dom::remove_class(link, ACTIVE_CLASS);
            let href = link.get_attribute("href").unwrap_or_default();
            if link_targets_section(&href, current) {
                dom::add_class(link, ACTIVE_CLASS);
            }
        }
    });
}

pub fn mount(window: &web::Window, els: NavElements) {
    let NavElements {
        nav,
        toggle,
        links,
        sections,
        body,
    } = els;

    if let Some(nav) = nav.clone() {
        wire_bar_style(window, nav);
    } else {
        log::debug!("[nav] no nav bar");
    }

    if !links.is_empty() {
        wire_active_link(window, links, sections);
    }

    if let (Some(toggle), Some(nav)) = (toggle, nav) {
        dom::add_click_listener(&toggle, move |_| {
            dom::toggle_class(&nav, NAV_OPEN_CLASS);
            if let Some(body) = &body {
                dom::toggle_class(body, NO_SCROLL_CLASS);
            }
        });
    }
}

/// Narrow `section[id]` matches to HTML elements so offsets can be read.
pub fn html_sections(sections: Vec<web::Element>) -> Vec<web::HtmlElement> {
    sections
        .into_iter()
        .filter_map(|s| s.dyn_into::<web::HtmlElement>().ok())
        .collect()
}
