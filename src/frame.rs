use crate::audio::ClickVoice;
use crate::effects::PageEffects;
use crate::haptics::Vibrator;
use geiger_core::{EffectDispatcher, FrameHost, FrameOutcome, GeigerDevice, SessionClock};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
pub type Device = GeigerDevice<RafHost, StdRng>;
pub type Dispatcher = EffectDispatcher<PageEffects, Vibrator, ClickVoice>;

/// requestAnimationFrame as the scheduler's frame source.
pub struct RafHost {
    callback: FrameCallback,
}

impl RafHost {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameHost for RafHost {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            log::error!("[frame] loop callback not installed");
            return None;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub device: Rc<RefCell<Device>>,
    pub dispatcher: Rc<RefCell<Dispatcher>>,
    pub clock: SessionClock,
}

impl FrameContext {
    pub fn frame(&self) {
        let now = self.clock.now_ms();
        let mut device = self.device.borrow_mut();
        if let FrameOutcome::Tick { level, next_in_ms } = device.on_frame(now) {
            log::trace!("[frame] tick level={} next_in={:.1}ms", level, next_in_ms);
            self.dispatcher
                .borrow_mut()
                .dispatch(level, device.rng_mut());
        }
    }
}

/// Install the frame closure. Frames are only requested by the device while
/// it is running; a stopped device lets the chain end.
pub fn install_loop(frame_ctx: Rc<FrameContext>, callback: &FrameCallback) {
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        frame_ctx.frame();
    }) as Box<dyn FnMut(f64)>));
}
