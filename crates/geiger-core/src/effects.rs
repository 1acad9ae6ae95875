//! Per-click visual decisions.
//!
//! Everything random about a click's presentation is rolled here, up front,
//! so the front-end only has to apply a [`ClickPlan`] to the page.

use crate::constants::*;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleSize {
    Small,
    Medium,
    Large,
}

impl ParticleSize {
    pub fn css_class(self) -> &'static str {
        match self {
            ParticleSize::Small => "small",
            ParticleSize::Medium => "medium",
            ParticleSize::Large => "large",
        }
    }

    /// Size class for a particle spawned at `level`.
    pub fn roll<R: Rng + ?Sized>(level: i32, rng: &mut R) -> Self {
        if level > 500 {
            let r: f64 = rng.gen();
            if r < 0.3 {
                ParticleSize::Large
            } else if r < 0.6 {
                ParticleSize::Medium
            } else {
                ParticleSize::Small
            }
        } else if level > 300 {
            if rng.gen::<f64>() < 0.5 {
                ParticleSize::Medium
            } else {
                ParticleSize::Small
            }
        } else {
            ParticleSize::Small
        }
    }
}

/// One rising particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size: ParticleSize,
    /// Horizontal start position in percent of the container width.
    pub start_x_pct: f64,
    pub drift_px: f64,
    pub drift_end_px: f64,
    pub lifetime_sec: f64,
    /// Delay after the click before the particle is inserted.
    pub spawn_delay_ms: i32,
}

impl ParticleSpec {
    pub fn roll<R: Rng + ?Sized>(level: i32, index: usize, rng: &mut R) -> Self {
        let size = ParticleSize::roll(level, rng);
        let start_x_pct = rng.gen::<f64>() * 100.0;
        let drift_px = (rng.gen::<f64>() - 0.5) * 50.0;
        let lifetime_sec = 2.0 + rng.gen::<f64>() * 2.0;
        Self {
            size,
            start_x_pct,
            drift_px,
            drift_end_px: drift_px * 1.5,
            lifetime_sec,
            spawn_delay_ms: index as i32 * PARTICLE_STAGGER_MS,
        }
    }

    /// Milliseconds after insertion at which the element is removed.
    pub fn remove_after_ms(&self) -> i32 {
        (self.lifetime_sec * 1000.0 + PARTICLE_REMOVE_GRACE_MS) as i32
    }
}

/// Number of particles in a burst at `level`.
#[inline]
pub fn particle_count(level: i32) -> usize {
    if level < PARTICLE_MIN_LEVEL {
        return 0;
    }
    ((level / PARTICLE_LEVEL_STEP) as usize).min(PARTICLE_MAX)
}

/// Glitch overlay pulse, optionally with screen distortion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlitchPlan {
    pub distortion: bool,
}

impl GlitchPlan {
    /// `None` below [`GLITCH_MIN_LEVEL`].
    pub fn roll<R: Rng + ?Sized>(level: i32, rng: &mut R) -> Option<Self> {
        if level < GLITCH_MIN_LEVEL {
            return None;
        }
        let distortion = level > DISTORTION_LEVEL && rng.gen::<f64>() < DISTORTION_CHANCE;
        Some(Self { distortion })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickPlan {
    pub shake: bool,
    pub glitch: Option<GlitchPlan>,
    pub particles: SmallVec<[ParticleSpec; PARTICLE_MAX]>,
    pub bar_flash: bool,
}

impl ClickPlan {
    pub fn roll<R: Rng + ?Sized>(level: i32, rng: &mut R) -> Self {
        let shake = level > SHAKE_LEVEL;
        let glitch = if level > CLICK_GLITCH_LEVEL && rng.gen::<f64>() < CLICK_GLITCH_CHANCE {
            GlitchPlan::roll(level, rng)
        } else {
            None
        };
        let particles = if rng.gen::<f64>() < PARTICLE_CHANCE {
            (0..particle_count(level))
                .map(|i| ParticleSpec::roll(level, i, rng))
                .collect()
        } else {
            SmallVec::new()
        };
        Self {
            shake,
            glitch,
            particles,
            bar_flash: true,
        }
    }
}
