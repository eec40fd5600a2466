use crate::constants::{HINT_ID, OVERLAY_ID, SUBTITLE_ID, TITLE_ID};
use crate::dom;
use web_sys as web;

/// Fill in the heading copy.
pub fn set_heading(document: &web::Document, title: &str, subtitle: &str) {
    dom::set_text(document, TITLE_ID, title);
    dom::set_text(document, SUBTITLE_ID, subtitle);
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Update the status line under the heading.
pub fn update_hint(document: &web::Document, paused: bool, auto_rotate: bool) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let state = if paused { "Paused" } else { "Running" };
        let spin = if auto_rotate { "on" } else { "off" };
        let hint_html = format!(
            "<div style='color: #ffffff; font: 13px system-ui; opacity: 0.85;'>{} • Auto-rotate {} • Space pause • R restart • A rotate • H hide</div>",
            state, spin
        );
        el.set_inner_html(&hint_html);
    }
}
