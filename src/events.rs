use crate::audio::{self, SharedAudio};
use crate::constants::*;
use crate::dom;
use crate::App;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_controls(document: &web::Document, app: Rc<App>) {
    for event in ["input", "change"] {
        let app_slider = app.clone();
        let closure = Closure::wrap(Box::new(move || {
            app_slider.on_slider();
        }) as Box<dyn FnMut()>);
        let _ = app
            .page
            .slider
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let app_start = app.clone();
    dom::add_click_listener(document, ID_START_BUTTON, move || {
        let app = app_start.clone();
        spawn_local(async move { app.start().await });
    });

    let app_stop = app.clone();
    dom::add_click_listener(document, ID_STOP_BUTTON, move || app_stop.stop());

    let app_reset = app.clone();
    dom::add_click_listener(document, ID_RESET_BUTTON, move || app_reset.reset());

    let app_test = app;
    dom::add_click_listener(document, ID_TEST_BUTTON, move || {
        let app = app_test.clone();
        spawn_local(async move { app.test_audio().await });
    });
}

// Browsers suspend audio in background tabs; resume when we come back
pub fn wire_visibility_resume(document: &web::Document, session: SharedAudio) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if doc.visibility_state() == web::VisibilityState::Visible {
            let session = session.clone();
            spawn_local(async move { audio::resume(&session).await });
        }
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Block pinch zoom and double-tap zoom on touch devices.
pub fn wire_zoom_guards(document: &web::Document) {
    let gesture = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = document
        .add_event_listener_with_callback("gesturestart", gesture.as_ref().unchecked_ref());
    gesture.forget();

    let last_touch_end = Rc::new(Cell::new(0.0_f64));
    let touch_end = Closure::wrap(Box::new(move |ev: web::Event| {
        let now = js_sys::Date::now();
        if now - last_touch_end.get() <= DOUBLE_TAP_MS {
            ev.prevent_default();
        }
        last_touch_end.set(now);
    }) as Box<dyn FnMut(_)>);
    let _ = document
        .add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref());
    touch_end.forget();
}
