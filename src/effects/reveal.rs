use crate::core::reveal::{
    cascade_delay_ms, delay_class, delay_tier, staged_selector, REVEALED_CLASS, REVEAL_CLASS,
};
use crate::core::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom::{self, ObserveOptions};
use web_sys as web;

fn reveal(target: web::Element, observer: &web::IntersectionObserver) {
    dom::add_class(&target, REVEALED_CLASS);
    observer.unobserve(&target);

    for (i, child) in dom::query_all(&target, &staged_selector())
        .into_iter()
        .enumerate()
    {
        dom::set_timeout(cascade_delay_ms(i), move || {
            dom::add_class(&child, REVEALED_CLASS);
        });
    }
}

/// Observe pre-tagged `.reveal` elements, then tag and observe the content of
/// every section (`sections`) that isn't tagged yet.
pub fn mount(
    tagged: Vec<web::Element>,
    sections: Vec<web::Element>,
    section_content: &str,
) -> anyhow::Result<()> {
    let observer = dom::intersection_observer(
        ObserveOptions {
            threshold: Some(REVEAL_THRESHOLD),
            root_margin: Some(REVEAL_ROOT_MARGIN),
        },
        reveal,
    )?;

    for el in &tagged {
        observer.observe(el);
    }

    let mut auto_tagged = 0usize;
    for section in &sections {
        for (index, el) in dom::query_all(section, section_content)
            .into_iter()
            .enumerate()
        {
            if el.class_list().contains(REVEAL_CLASS) {
                continue;
            }
            dom::add_class(&el, REVEAL_CLASS);
            if let Some(class) = delay_tier(index).and_then(delay_class) {
                dom::add_class(&el, class);
            }
            observer.observe(&el);
            auto_tagged += 1;
        }
    }
    log::debug!(
        "[reveal] {} tagged, {} auto-tagged in {} sections",
        tagged.len(),
        auto_tagged,
        sections.len()
    );
    Ok(())
}
