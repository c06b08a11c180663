use crate::dom;
use web_sys as web;

fn scroll_to_fragment(document: &web::Document, href: &str) {
    // "#" alone or a fragment that isn't a valid selector simply matches nothing
    let Ok(Some(target)) = document.query_selector(href) else {
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn mount(document: &web::Document, anchors: Vec<web::Element>) {
    for anchor in anchors {
        let doc = document.clone();
        let a = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            if let Some(href) = a.get_attribute("href") {
                scroll_to_fragment(&doc, &href);
            }
        });
    }
}
