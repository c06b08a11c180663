use crate::core::color;
use crate::core::particles::{ParticleField, ParticleParams};
use crate::core::{LINK_ALPHA, LINK_WIDTH, RESIZE_DEBOUNCE_MS};
use crate::dom;
use crate::frame;
use crate::selectors::ACCENT_PROPERTY;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ParticleCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    root: Option<web::Element>,
    field: ParticleField,
}

impl ParticleCanvas {
    fn accent(&self) -> String {
        let raw = self
            .root
            .as_ref()
            .and_then(|root| web::window()?.get_computed_style(root).ok().flatten())
            .and_then(|style| style.get_property_value(ACCENT_PROPERTY).ok())
            .unwrap_or_default();
        color::accent_or_fallback(&raw).to_string()
    }

    fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_to_layout(&self.canvas);
        self.field.resize(w as f32, h as f32);
        log::debug!(
            "[particles] resized to {}x{}, {} particles",
            w,
            h,
            self.field.particles().len()
        );
    }

    fn frame(&mut self) {
        self.field.step();

        let size = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);

        let accent = self.accent();
        self.ctx.set_fill_style_str(&accent);
        for p in self.field.particles() {
            self.ctx.set_global_alpha(p.opacity() as f64);
            self.ctx.begin_path();
            _ = self.ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);

        self.ctx
            .set_stroke_style_str(&color::with_alpha(&accent, LINK_ALPHA));
        self.ctx.set_line_width(LINK_WIDTH);
        let ps = self.field.particles();
        for (i, j) in self.field.connections() {
            self.ctx.begin_path();
            self.ctx.move_to(ps[i].pos.x as f64, ps[i].pos.y as f64);
            self.ctx.line_to(ps[j].pos.x as f64, ps[j].pos.y as f64);
            self.ctx.stroke();
        }
    }
}

pub fn mount(document: &web::Document, canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w, h) = dom::sync_canvas_to_layout(&canvas);
    let field = ParticleField::new(
        w as f32,
        h as f32,
        ParticleParams::default(),
        StdRng::from_entropy(),
    );
    log::debug!(
        "[particles] {}x{} canvas, {} particles",
        w,
        h,
        field.particles().len()
    );
    let state = Rc::new(RefCell::new(ParticleCanvas {
        canvas: canvas.clone(),
        ctx,
        root: document.document_element(),
        field,
    }));

    let pointer_state = state.clone();
    let canvas_for_pointer = canvas.clone();
    dom::listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let rect = canvas_for_pointer.get_bounding_client_rect();
        let p = Vec2::new(
            (ev.client_x() as f64 - rect.left()) as f32,
            (ev.client_y() as f64 - rect.top()) as f32,
        );
        pointer_state.borrow_mut().field.set_pointer(p);
    });

    if let Some(window) = web::window() {
        let debounce = dom::Debouncer::new(RESIZE_DEBOUNCE_MS);
        let resize_state = state.clone();
        dom::listen(&window, "resize", move |_: web::Event| {
            let s = resize_state.clone();
            debounce.call(move || s.borrow_mut().resize());
        });
    }

    frame::start_forever(move |_| state.borrow_mut().frame());
    Ok(())
}
