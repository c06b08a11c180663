use crate::core::counter::{parse_count, CounterAnimation};
use crate::dom::{self, ObserveOptions};
use crate::frame::{self, Flow};
use crate::selectors::COUNTER_ATTR;
use instant::Instant;
use web_sys as web;

fn animate(el: web::Element) {
    let raw = el.get_attribute(COUNTER_ATTR).unwrap_or_default();
    let Some(target) = parse_count(&raw) else {
        log::warn!("[counters] ignoring non-numeric {}={:?}", COUNTER_ATTR, raw);
        return;
    };
    let anim = CounterAnimation::new(target);
    let started = Instant::now();
    frame::start_loop(move |_| {
        let (value, done) = anim.sample(started.elapsed());
        el.set_text_content(Some(&value.to_string()));
        if done {
            Flow::Stop
        } else {
            Flow::Continue
        }
    });
}

pub fn mount(counters: Vec<web::Element>) -> anyhow::Result<()> {
    let observer = dom::intersection_observer(ObserveOptions::default(), |el, observer| {
        observer.unobserve(&el);
        animate(el);
    })?;
    for el in &counters {
        observer.observe(el);
    }
    log::debug!("[counters] watching {}", counters.len());
    Ok(())
}
