use crate::core::form::{ContactForm, Field, FieldKind, SubmitOutcome};
use crate::core::SIMULATED_SUBMIT_MS;
use crate::dom;
use crate::effects::notify;
use crate::selectors::LOADING_CLASS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
enum FieldHandle {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
    Select(web::HtmlSelectElement),
}

impl FieldHandle {
    fn from_element(el: web::Element) -> Option<Self> {
        let el = match el.dyn_into::<web::HtmlInputElement>() {
            Ok(i) => return Some(FieldHandle::Input(i)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<web::HtmlTextAreaElement>() {
            Ok(t) => return Some(FieldHandle::TextArea(t)),
            Err(el) => el,
        };
        el.dyn_into::<web::HtmlSelectElement>()
            .ok()
            .map(FieldHandle::Select)
    }

    fn element(&self) -> &web::Element {
        match self {
            FieldHandle::Input(i) => i,
            FieldHandle::TextArea(t) => t,
            FieldHandle::Select(s) => s,
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            FieldHandle::Input(i) => FieldKind::from_input_type(&i.type_()),
            FieldHandle::TextArea(_) | FieldHandle::Select(_) => FieldKind::Other,
        }
    }

    fn value(&self) -> String {
        match self {
            FieldHandle::Input(i) => i.value(),
            FieldHandle::TextArea(t) => t.value(),
            FieldHandle::Select(s) => s.value(),
        }
    }
}

struct FormBinding {
    form: web::HtmlFormElement,
    submit_button: Option<web::Element>,
    handles: Vec<FieldHandle>,
    model: ContactForm,
}

impl FormBinding {
    fn pull_values(&mut self) {
        for (h, f) in self.handles.iter().zip(self.model.fields.iter_mut()) {
            f.value = h.value();
        }
    }

    fn push_status(&self, index: usize) {
        let (Some(h), Some(f)) = (self.handles.get(index), self.model.fields.get(index)) else {
            return;
        };
        let el = h.element();
        dom::remove_class(el, "valid");
        dom::remove_class(el, "error");
        if let Some(class) = f.status.class() {
            dom::add_class(el, class);
        }
    }

    fn push_all_status(&self) {
        for i in 0..self.handles.len() {
            self.push_status(i);
        }
    }

    fn set_loading(&self, loading: bool) {
        if let Some(btn) = &self.submit_button {
            if loading {
                dom::add_class(btn, LOADING_CLASS);
            } else {
                dom::remove_class(btn, LOADING_CLASS);
            }
        }
    }
}

fn finish_send(document: &web::Document, binding: &Rc<RefCell<FormBinding>>) {
    let mut b = binding.borrow_mut();
    b.set_loading(false);
    if let Some(notification) = b.model.complete() {
        b.form.reset();
        b.push_all_status();
        drop(b);
        notify::show_or_log(document, &notification);
    }
}

fn on_submit(document: &web::Document, binding: &Rc<RefCell<FormBinding>>) {
    let outcome = {
        let mut b = binding.borrow_mut();
        b.pull_values();
        let outcome = b.model.submit();
        b.push_all_status();
        outcome
    };
    match outcome {
        SubmitOutcome::Sending => {
            binding.borrow().set_loading(true);
            let doc = document.clone();
            let binding = binding.clone();
            spawn_local(async move {
                dom::sleep_ms(SIMULATED_SUBMIT_MS).await;
                finish_send(&doc, &binding);
            });
        }
        SubmitOutcome::Rejected {
            ref invalid,
            ref notification,
        } => {
            log::debug!("[form] {} invalid field(s)", invalid.len());
            // focus() fires blur on the previous field, which borrows the binding
            let target = outcome.focus_index().and_then(|i| {
                let b = binding.borrow();
                b.handles
                    .get(i)
                    .and_then(|h| dom::as_html(h.element()).cloned())
            });
            if let Some(el) = target {
                _ = el.focus();
            }
            notify::show_or_log(document, notification);
        }
        SubmitOutcome::Busy => log::debug!("[form] submit ignored, send in flight"),
    }
}

pub fn mount(
    document: &web::Document,
    form: web::HtmlFormElement,
    fields: Vec<web::Element>,
    submit_button: Option<web::Element>,
) {
    let handles: Vec<FieldHandle> = fields
        .into_iter()
        .filter_map(FieldHandle::from_element)
        .collect();
    let model = ContactForm::new(
        handles
            .iter()
            .map(|h| Field::new(h.kind(), h.value()))
            .collect(),
    );
    log::debug!("[form] {} fields", handles.len());

    let binding = Rc::new(RefCell::new(FormBinding {
        form: form.clone(),
        submit_button,
        handles: handles.clone(),
        model,
    }));

    for (i, h) in handles.iter().enumerate() {
        let binding = binding.clone();
        let handle = h.clone();
        dom::listen(h.element(), "blur", move |_: web::Event| {
            let Ok(mut b) = binding.try_borrow_mut() else {
                log::warn!("[form] blur on field {} while form busy", i);
                return;
            };
            if let Some(f) = b.model.fields.get_mut(i) {
                f.value = handle.value();
            }
            if let Some(Err(e)) = b.model.blur(i) {
                log::debug!("[form] field {} invalid: {}", i, e);
            }
            b.push_status(i);
        });
    }

    let doc = document.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        on_submit(&doc, &binding);
    });
}
