//! Fan-out of one tick to the three effect producers.

use crate::effects::ClickPlan;
use crate::haptics::vibration_pattern;
use crate::sound::ClickTimbre;
use rand::Rng;

/// Transient presentation flags (glitch, shake, particles, bar flash).
pub trait VisualSink {
    fn show_click(&mut self, plan: &ClickPlan);
}

/// Vibration hardware. Implementations swallow their own failures.
pub trait HapticSink {
    fn vibrate(&mut self, pattern: &[u32]);
}

/// Click synthesis. Implementations turn into no-ops when audio is down.
pub trait SoundSink {
    fn play_click(&mut self, timbre: &ClickTimbre);
}

/// What one tick produced, mostly for logging and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchReport {
    pub level: i32,
    pub plan: ClickPlan,
    pub pattern: &'static [u32],
    pub timbre: ClickTimbre,
}

pub struct EffectDispatcher<V, H, S> {
    pub visual: V,
    pub haptic: H,
    pub sound: S,
}

impl<V: VisualSink, H: HapticSink, S: SoundSink> EffectDispatcher<V, H, S> {
    pub fn new(visual: V, haptic: H, sound: S) -> Self {
        Self {
            visual,
            haptic,
            sound,
        }
    }

    /// Fire visual, haptic and audio producers for one tick, in that order.
    /// None of them waits on another.
    pub fn dispatch<R: Rng + ?Sized>(&mut self, level: i32, rng: &mut R) -> DispatchReport {
        let plan = ClickPlan::roll(level, rng);
        self.visual.show_click(&plan);

        let pattern = vibration_pattern(level);
        self.haptic.vibrate(pattern);

        let timbre = ClickTimbre::sample(rng);
        self.sound.play_click(&timbre);

        DispatchReport {
            level,
            plan,
            pattern,
            timbre,
        }
    }
}
