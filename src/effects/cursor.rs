use crate::core::cursor::{hover_transforms, CursorTrail};
use crate::dom;
use crate::frame;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct CursorMarkers {
    pub dot: web::HtmlElement,
    pub outline: web::HtmlElement,
}

impl CursorMarkers {
    fn set_opacity(&self, value: &str) {
        dom::set_style(&self.dot, "opacity", value);
        dom::set_style(&self.outline, "opacity", value);
    }

    fn set_hovered(&self, hovered: bool) {
        let (dot, outline) = hover_transforms(hovered);
        dom::set_style(&self.dot, "transform", &dot);
        dom::set_style(&self.outline, "transform", &outline);
    }

    fn place(&self, trail: &CursorTrail) {
        let (d, o) = (trail.dot(), trail.outline());
        dom::set_style(&self.dot, "left", &format!("{}px", d.x));
        dom::set_style(&self.dot, "top", &format!("{}px", d.y));
        dom::set_style(&self.outline, "left", &format!("{}px", o.x));
        dom::set_style(&self.outline, "top", &format!("{}px", o.y));
    }
}

pub fn mount(document: &web::Document, markers: CursorMarkers, hover_targets: Vec<web::Element>) {
    let trail = Rc::new(RefCell::new(CursorTrail::default()));

    let trail_move = trail.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        trail_move
            .borrow_mut()
            .set_target(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    });

    let m = markers.clone();
    dom::listen(document, "mouseenter", move |_: web::MouseEvent| m.set_opacity("1"));
    let m = markers.clone();
    dom::listen(document, "mouseleave", move |_: web::MouseEvent| m.set_opacity("0"));

    for el in &hover_targets {
        let m = markers.clone();
        dom::listen(el, "mouseenter", move |_: web::MouseEvent| m.set_hovered(true));
        let m = markers.clone();
        dom::listen(el, "mouseleave", move |_: web::MouseEvent| m.set_hovered(false));
    }
    log::debug!("[cursor] {} hover targets", hover_targets.len());

    frame::start_forever(move |_| {
        let mut t = trail.borrow_mut();
        t.step();
        markers.place(&t);
    });
}
