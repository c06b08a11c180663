use crate::core::parallax::{floating_card_offset, generic_offset, translate_y};
use crate::dom;
use web_sys as web;

/// Floating cards are written after generic elements, so a card that is also
/// `[data-parallax]` ends up with the card rate.
pub fn mount(window: &web::Window, generic: Vec<web::HtmlElement>, cards: Vec<web::HtmlElement>) {
    if generic.is_empty() && cards.is_empty() {
        return;
    }
    let w = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let scrolled = w.page_y_offset().unwrap_or(0.0);
        let generic_transform = translate_y(generic_offset(scrolled));
        for el in &generic {
            dom::set_style(el, "transform", &generic_transform);
        }
        for (i, card) in cards.iter().enumerate() {
            dom::set_style(card, "transform", &translate_y(floating_card_offset(scrolled, i)));
        }
    });
}
