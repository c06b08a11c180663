use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Whether a frame callback wants another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

fn request(cb: &Closure<dyn FnMut(f64)>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Drive `tick` from requestAnimationFrame until it returns [`Flow::Stop`].
/// `tick` receives the frame timestamp in milliseconds.
pub fn start_loop(mut tick: impl FnMut(f64) -> Flow + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        match tick(ts) {
            Flow::Continue => {
                if let Some(cb) = slot_tick.borrow().as_ref() {
                    request(cb);
                }
            }
            // Dropping the closure from inside its own call is not allowed,
            // so release it on the next turn of the event loop.
            Flow::Stop => {
                let slot_release = slot_tick.clone();
                crate::dom::set_timeout(0, move || {
                    slot_release.borrow_mut().take();
                });
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = slot.borrow().as_ref() {
        request(cb);
    };
}

/// Loop that runs for the whole page lifetime.
pub fn start_forever(mut tick: impl FnMut(f64) + 'static) {
    start_loop(move |ts| {
        tick(ts);
        Flow::Continue
    });
}
