use crate::core::notify::Notification;
use crate::dom;
use crate::selectors::NOTIFICATION_CLOSE_CLASS;
use web_sys as web;

/// Append a toast to the body; it removes itself on close or after its timeout.
pub fn show(document: &web::Document, notification: &Notification) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;

    let toast = document.create_element("div").map_err(dom::js_err)?;
    toast.set_class_name(&notification.class_name());

    let text = document.create_element("span").map_err(dom::js_err)?;
    text.set_text_content(Some(&notification.message));
    let close = document.create_element("button").map_err(dom::js_err)?;
    close.set_class_name(NOTIFICATION_CLOSE_CLASS);
    close.set_text_content(Some("\u{00d7}"));

    toast.append_child(&text).map_err(dom::js_err)?;
    toast.append_child(&close).map_err(dom::js_err)?;
    body.append_child(&toast).map_err(dom::js_err)?;

    let t = toast.clone();
    dom::add_click_listener(&close, move |_| t.remove());
    dom::set_timeout(notification.dismiss_after_ms, move || toast.remove());

    log::info!(
        "[notify] {}: {}",
        notification.kind.as_str(),
        notification.message
    );
    Ok(())
}

pub fn show_or_log(document: &web::Document, notification: &Notification) {
    if let Err(e) = show(document, notification) {
        log::warn!("[notify] could not show toast: {:?}", e);
    }
}
