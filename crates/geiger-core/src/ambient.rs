//! Background effects that run on wall-clock timers instead of ticks.

use crate::constants::*;
use crate::effects::GlitchPlan;
use rand::Rng;

/// Whether ambient effects may fire right now.
///
/// With `requires_running` set the ambient loops stay silent while the
/// counter is stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmbientGate {
    pub requires_running: bool,
}

impl AmbientGate {
    #[inline]
    pub fn allows(&self, running: bool) -> bool {
        running || !self.requires_running
    }

    /// Glitch for one firing of the ambient glitch loop.
    pub fn glitch<R: Rng + ?Sized>(
        &self,
        running: bool,
        level: i32,
        rng: &mut R,
    ) -> Option<GlitchPlan> {
        if !self.allows(running) || level <= AMBIENT_GLITCH_LEVEL {
            return None;
        }
        GlitchPlan::roll(level, rng)
    }

    /// Noise opacity for one firing of the noise loop; `None` leaves the
    /// current value untouched.
    pub fn noise(&self, running: bool, level: i32) -> Option<f32> {
        if !self.allows(running) {
            return None;
        }
        noise_opacity(level)
    }
}

/// Delay until the ambient glitch loop fires again, re-rolled every time.
pub fn next_glitch_delay_ms<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(AMBIENT_GLITCH_DELAY_MIN_MS..AMBIENT_GLITCH_DELAY_MAX_MS)
}

/// `--noise-opacity` for `level`, only above [`NOISE_MIN_LEVEL`].
pub fn noise_opacity(level: i32) -> Option<f32> {
    if level <= NOISE_MIN_LEVEL {
        return None;
    }
    let intensity = (level as f32 / LEVEL_MAX as f32).min(1.0);
    Some(intensity * NOISE_OPACITY_SCALE)
}
