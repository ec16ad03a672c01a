//! Small DOM helpers shared by the page wiring

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub fn window_document() -> Option<(Window, Document)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> Vec2 {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

/// High-resolution clock (ms), same origin as frame timestamps
pub fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn add_class(document: &Document, id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.class_list().add_1(class);
    }
}

pub fn remove_class(document: &Document, id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.class_list().remove_1(class);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

/// Attach a listener for the lifetime of the page
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once after `ms` milliseconds
pub fn set_timeout(window: &Window, ms: i32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
    {
        log::warn!("setTimeout failed: {:?}", e);
    }
}

/// Run `f` every `ms` milliseconds; returns the interval id
pub fn set_interval(window: &Window, ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
    let closure = Closure::<dyn FnMut()>::new(f);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .map_err(|e| log::warn!("setInterval failed: {:?}", e))
        .ok();
    closure.forget();
    id
}
