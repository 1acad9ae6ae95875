#![cfg(target_arch = "wasm32")]
use geiger_core::{
    AmbientGate, EffectDispatcher, GeigerDevice, GeigerParams, Readout, ReadoutUpdate,
    SessionClock,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod audio;
mod constants;
mod display;
mod dom;
mod effects;
mod events;
mod frame;
mod haptics;

use audio::SharedAudio;
use frame::Device;

/// Everything the controls act on.
pub(crate) struct App {
    page: display::Page,
    device: Rc<RefCell<Device>>,
    audio: SharedAudio,
    params: GeigerParams,
}

impl App {
    fn refresh_display(&self) {
        let (level, update) = {
            let mut d = self.device.borrow_mut();
            let levels = *d.levels();
            let update =
                ReadoutUpdate::plan(&levels, self.params.animate_threshold, d.rng_mut());
            (levels.level(), update)
        };
        self.page.show_level(&Readout::for_level(level), update);
    }

    pub(crate) fn on_slider(&self) {
        match self.page.slider_level() {
            Some(level) => {
                self.device.borrow_mut().set_level(level);
                self.refresh_display();
            }
            None => log::warn!("[device] ignoring non-numeric slider value"),
        }
    }

    pub(crate) async fn start(&self) {
        if self.device.borrow().is_running() {
            return;
        }
        if !self.audio.borrow().is_enabled() {
            audio::init(&self.audio).await;
        }
        if self.device.borrow_mut().start() {
            self.page.show_running(true);
        }
    }

    pub(crate) fn stop(&self) {
        self.device.borrow_mut().stop();
        self.page.show_running(false);
    }

    pub(crate) fn reset(&self) {
        self.device.borrow_mut().reset();
        self.page.set_slider_level(0);
        self.refresh_display();
        self.page.show_running(false);
    }

    pub(crate) async fn test_audio(&self) {
        audio::init(&self.audio).await;
        self.audio.borrow_mut().play_test_beep();
    }
}

// Independent streams from one seed, or entropy when unseeded
fn make_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        None => StdRng::from_entropy(),
    }
}

fn load_params() -> (GeigerParams, Vec<geiger_core::ConfigError>) {
    let query = web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    GeigerParams::from_query(&query)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (params, errors) = load_params();
    console_log::init_with_level(params.log_level).ok();
    log::info!("geiger-web starting");
    for e in &errors {
        log::warn!("[config] {}; keeping the default for that key", e);
    }

    spawn_local(async move {
        if let Err(e) = init(params).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(params: GeigerParams) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = display::Page::bind(&document)?;
    let page_effects = effects::PageEffects::bind(&document)?;

    let callback: frame::FrameCallback = Rc::new(RefCell::new(None));
    let device = Rc::new(RefCell::new(GeigerDevice::new(
        frame::RafHost::new(callback.clone()),
        make_rng(params.seed, 0),
    )));
    let audio: SharedAudio = Rc::new(RefCell::new(audio::AudioSession::new(make_rng(
        params.seed,
        1,
    ))));
    let dispatcher = Rc::new(RefCell::new(EffectDispatcher::new(
        page_effects.clone(),
        haptics::Vibrator::detect(),
        audio::ClickVoice::new(audio.clone()),
    )));
    frame::install_loop(
        Rc::new(frame::FrameContext {
            device: device.clone(),
            dispatcher,
            clock: SessionClock::new(),
        }),
        &callback,
    );

    ambient::start(
        device.clone(),
        page_effects,
        AmbientGate {
            requires_running: params.ambient_requires_running,
        },
    );

    let app = Rc::new(App {
        page,
        device,
        audio,
        params,
    });
    // Pick up whatever value the slider was restored to
    app.on_slider();
    app.page.show_running(false);
    events::wire_controls(&document, app.clone());
    events::wire_visibility_resume(&document, app.audio.clone());
    events::wire_zoom_guards(&document);
    log::info!(
        "[device] ready, ambient effects {}",
        if app.params.ambient_requires_running {
            "gated on run state"
        } else {
            "always on"
        }
    );
    Ok(())
}
