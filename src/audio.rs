use geiger_core::{
    fill_noise, noise_len, ClickTimbre, SoundSink, TEST_BEEP_FLOOR, TEST_BEEP_GAIN, TEST_BEEP_HZ,
    TEST_BEEP_SEC, TONE_ATTACK_SEC, TONE_HIGHPASS_HZ, TONE_RELEASE_FLOOR,
};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// The page's single WebAudio context, created on first use.
///
/// Creation or resume failures leave the session disabled; every sound call
/// is then a no-op until a later `init` succeeds.
pub struct AudioSession {
    ctx: Option<web::AudioContext>,
    enabled: bool,
    rng: StdRng,
}

pub type SharedAudio = Rc<RefCell<AudioSession>>;

impl AudioSession {
    pub fn new(rng: StdRng) -> Self {
        Self {
            ctx: None,
            enabled: false,
            rng,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn context(&mut self) -> Option<web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    log::info!("[audio] context created: {:?}", ctx.state());
                    self.ctx = Some(ctx);
                }
                Err(e) => {
                    log::error!("[audio] AudioContext error: {:?}", e);
                    self.enabled = false;
                }
            }
        }
        self.ctx.clone()
    }

    pub fn play_test_beep(&mut self) {
        let Some(ctx) = self.active_context() else {
            log::warn!("[audio] test beep skipped, audio disabled");
            return;
        };
        match test_beep(&ctx) {
            Ok(()) => log::info!("[audio] test beep played"),
            Err(e) => log::error!("[audio] test beep error: {:?}", e),
        }
    }

    fn active_context(&self) -> Option<web::AudioContext> {
        if self.enabled {
            self.ctx.clone()
        } else {
            None
        }
    }
}

/// Create the context if needed and resume it when the browser's autoplay
/// policy left it suspended.
pub async fn init(session: &SharedAudio) {
    let ctx = session.borrow_mut().context();
    let Some(ctx) = ctx else {
        return;
    };
    let ok = resume_if_suspended(&ctx).await;
    session.borrow_mut().enabled = ok;
}

/// Resume after the page becomes visible again. Does not create a context.
pub async fn resume(session: &SharedAudio) {
    let ctx = session.borrow().ctx.clone();
    if let Some(ctx) = ctx {
        if ctx.state() == web::AudioContextState::Suspended {
            let ok = resume_if_suspended(&ctx).await;
            session.borrow_mut().enabled = ok;
        }
    }
}

async fn resume_if_suspended(ctx: &web::AudioContext) -> bool {
    if ctx.state() != web::AudioContextState::Suspended {
        return true;
    }
    let promise = match ctx.resume() {
        Ok(p) => p,
        Err(e) => {
            log::error!("[audio] resume error: {:?}", e);
            return false;
        }
    };
    match JsFuture::from(promise).await {
        Ok(_) => {
            log::info!("[audio] context resumed: {:?}", ctx.state());
            true
        }
        Err(e) => {
            log::error!("[audio] resume error: {:?}", e);
            false
        }
    }
}

/// Sound producer handed to the effect dispatcher.
pub struct ClickVoice {
    session: SharedAudio,
}

impl ClickVoice {
    pub fn new(session: SharedAudio) -> Self {
        Self { session }
    }
}

impl SoundSink for ClickVoice {
    fn play_click(&mut self, timbre: &ClickTimbre) {
        let mut session = self.session.borrow_mut();
        let Some(ctx) = session.active_context() else {
            return;
        };
        if let Err(e) = click(&ctx, timbre, &mut session.rng) {
            log::error!("[audio] click error: {:?}", e);
        }
    }
}

fn click(ctx: &web::AudioContext, timbre: &ClickTimbre, rng: &mut StdRng) -> Result<(), JsValue> {
    let now = ctx.current_time();
    let destination = ctx.destination();

    // Tone sweep: square -> high-pass -> gain
    let tone = &timbre.tone;
    let osc = web::OscillatorNode::new(ctx)?;
    osc.set_type(web::OscillatorType::Square);
    osc.frequency().set_value_at_time(tone.start_hz, now)?;
    osc.frequency()
        .exponential_ramp_to_value_at_time(tone.end_hz, now + tone.duration_sec)?;
    let highpass = web::BiquadFilterNode::new(ctx)?;
    highpass.set_type(web::BiquadFilterType::Highpass);
    highpass.frequency().set_value_at_time(TONE_HIGHPASS_HZ, now)?;
    highpass.q().set_value_at_time(tone.filter_q, now)?;
    let tone_gain = web::GainNode::new(ctx)?;
    tone_gain.gain().set_value_at_time(0.0, now)?;
    tone_gain
        .gain()
        .linear_ramp_to_value_at_time(tone.peak_gain, now + TONE_ATTACK_SEC)?;
    tone_gain
        .gain()
        .exponential_ramp_to_value_at_time(TONE_RELEASE_FLOOR, now + tone.duration_sec)?;
    osc.connect_with_audio_node(&highpass)?;
    highpass.connect_with_audio_node(&tone_gain)?;
    tone_gain.connect_with_audio_node(&destination)?;
    osc.start_with_when(now)?;
    osc.stop_with_when(now + tone.duration_sec)?;

    // Noise burst: buffer -> band-pass -> gain
    let noise = &timbre.noise;
    let sample_rate = ctx.sample_rate();
    let len = noise_len(noise.duration_sec, sample_rate).max(1);
    let buffer = ctx.create_buffer(1, len as u32, sample_rate)?;
    let mut samples = vec![0.0_f32; len];
    fill_noise(&mut samples, rng);
    buffer.copy_to_channel(&mut samples, 0)?;
    let source = ctx.create_buffer_source()?;
    source.set_buffer(Some(&buffer));
    let bandpass = web::BiquadFilterNode::new(ctx)?;
    bandpass.set_type(web::BiquadFilterType::Bandpass);
    bandpass.frequency().set_value_at_time(noise.filter_hz, now)?;
    bandpass.q().set_value_at_time(noise.filter_q, now)?;
    let noise_gain = web::GainNode::new(ctx)?;
    noise_gain.gain().set_value_at_time(noise.gain, now)?;
    source.connect_with_audio_node(&bandpass)?;
    bandpass.connect_with_audio_node(&noise_gain)?;
    noise_gain.connect_with_audio_node(&destination)?;
    source.start_with_when(now)?;
    source.stop_with_when(now + noise.duration_sec)?;
    Ok(())
}

fn test_beep(ctx: &web::AudioContext) -> Result<(), JsValue> {
    let now = ctx.current_time();
    let osc = web::OscillatorNode::new(ctx)?;
    let gain = web::GainNode::new(ctx)?;
    osc.frequency().set_value_at_time(TEST_BEEP_HZ, now)?;
    gain.gain().set_value_at_time(TEST_BEEP_GAIN, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(TEST_BEEP_FLOOR, now + TEST_BEEP_SEC)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(now)?;
    osc.stop_with_when(now + TEST_BEEP_SEC)?;
    Ok(())
}
