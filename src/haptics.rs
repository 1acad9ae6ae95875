use geiger_core::HapticSink;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `navigator.vibrate`, when the browser has it.
pub struct Vibrator {
    navigator: Option<web::Navigator>,
    vibrate: Option<js_sys::Function>,
}

impl Vibrator {
    pub fn detect() -> Self {
        let navigator = web::window().map(|w| w.navigator());
        let vibrate = navigator
            .as_ref()
            .and_then(|n| js_sys::Reflect::get(n, &JsValue::from_str("vibrate")).ok())
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        log::info!("[haptics] vibration available: {}", vibrate.is_some());
        Self { navigator, vibrate }
    }
}

impl HapticSink for Vibrator {
    fn vibrate(&mut self, pattern: &[u32]) {
        let (Some(navigator), Some(vibrate)) = (&self.navigator, &self.vibrate) else {
            return;
        };
        let pattern: js_sys::Array = pattern.iter().map(|&ms| JsValue::from(ms)).collect();
        if let Err(e) = vibrate.call1(navigator, &pattern) {
            log::debug!("[haptics] vibrate failed: {:?}", e);
        }
    }
}
