use crate::core::typing::{self, Typewriter};
use crate::core::{TYPING_CHAR_INTERVAL_MS, TYPING_COMPLETE_DELAY_MS, TYPING_START_DELAY_MS};
use crate::dom;
use crate::selectors::{TYPING_COMPLETE_CLASS, TYPING_TEXT_ATTR};
use web_sys as web;

fn type_next(el: web::Element, mut writer: Typewriter) {
    match writer.advance() {
        Some(visible) => {
            el.set_text_content(Some(&visible));
            dom::set_timeout(TYPING_CHAR_INTERVAL_MS, move || type_next(el, writer));
        }
        None => {
            dom::set_timeout(TYPING_COMPLETE_DELAY_MS, move || {
                dom::add_class(&el, TYPING_COMPLETE_CLASS);
            });
        }
    }
}

pub fn mount(el: web::Element) {
    let text = typing::source_text(el.get_attribute(TYPING_TEXT_ATTR), el.text_content());
    el.set_text_content(Some(""));
    let writer = Typewriter::new(&text);
    dom::set_timeout(TYPING_START_DELAY_MS, move || type_next(el, writer));
}
