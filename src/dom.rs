use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn html_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    element(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to bind", element_id);
    }
}

/// Run `f` once after `ms`. Scheduling failures are logged and dropped.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::error!("[dom] setTimeout error: {:?}", e);
    }
}

/// Run `f` every `ms` for the rest of the session.
pub fn set_interval(ms: i32, f: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms,
    ) {
        log::error!("[dom] setInterval error: {:?}", e);
    }
    closure.forget();
}

/// Add `class` to `el` and take it off again after `ms`.
pub fn pulse_class(el: &web::Element, class: &str, ms: i32) {
    let _ = el.class_list().add_1(class);
    let el = el.clone();
    let class = class.to_string();
    set_timeout(ms, move || {
        let _ = el.class_list().remove_1(&class);
    });
}
