//! Randomized click timbre.
//!
//! A click layers a short square-wave sweep through a high-pass filter with a
//! burst of band-passed noise. Both start at the same instant.

use rand::Rng;

pub const TONE_HIGHPASS_HZ: f32 = 2500.0;
pub const TONE_ATTACK_SEC: f64 = 0.0005;
pub const TONE_RELEASE_FLOOR: f32 = 0.001;

// Audio self-test beep
pub const TEST_BEEP_HZ: f32 = 800.0;
pub const TEST_BEEP_GAIN: f32 = 0.3;
pub const TEST_BEEP_FLOOR: f32 = 0.01;
pub const TEST_BEEP_SEC: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneLayer {
    pub duration_sec: f64,
    pub start_hz: f32,
    pub end_hz: f32,
    pub filter_q: f32,
    pub peak_gain: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseLayer {
    pub duration_sec: f64,
    pub filter_hz: f32,
    pub filter_q: f32,
    pub gain: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickTimbre {
    pub tone: ToneLayer,
    pub noise: NoiseLayer,
}

impl ClickTimbre {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let tone = ToneLayer {
            duration_sec: rng.gen_range(0.002..0.004),
            start_hz: rng.gen_range(3500.0..4200.0),
            end_hz: rng.gen_range(2800.0..3200.0),
            filter_q: rng.gen_range(15.0..20.0),
            peak_gain: rng.gen_range(0.25..0.35),
        };
        let noise = NoiseLayer {
            duration_sec: rng.gen_range(0.003..0.006),
            filter_hz: rng.gen_range(3000.0..4000.0),
            filter_q: rng.gen_range(8.0..12.0),
            gain: rng.gen_range(0.8..1.2),
        };
        Self { tone, noise }
    }
}

/// Fast linear attack over the first 10%, cubic decay to zero afterwards.
#[inline]
pub fn noise_envelope(progress: f32) -> f32 {
    if progress < 0.1 {
        progress * 10.0
    } else {
        (1.0 - (progress - 0.1) / 0.9).powi(3)
    }
}

/// Number of samples in a noise buffer of `duration_sec`.
#[inline]
pub fn noise_len(duration_sec: f64, sample_rate: f32) -> usize {
    (duration_sec * sample_rate as f64).floor() as usize
}

/// Fill `buf` with enveloped white noise.
pub fn fill_noise<R: Rng + ?Sized>(buf: &mut [f32], rng: &mut R) {
    let len = buf.len() as f32;
    for (i, s) in buf.iter_mut().enumerate() {
        let env = noise_envelope(i as f32 / len);
        let white = rng.gen::<f32>() * 2.0 - 1.0;
        *s = white * env * rng.gen_range(0.15_f32..0.25);
    }
}
