//! Readout formatting and the count-up animation.

use crate::constants::*;
use crate::level::LevelStore;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

pub const UNIT: &str = "μSv/h";

#[inline]
pub fn format_reading(level: i32) -> String {
    format!("{} {}", level, UNIT)
}

/// Level bar width in percent of the full scale. Not clamped.
#[inline]
pub fn bar_width_percent(level: i32) -> f64 {
    level as f64 * 100.0 / LEVEL_MAX as f64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelClass {
    Low,
    Medium,
    High,
    Extreme,
}

impl LevelClass {
    pub fn for_level(level: i32) -> Self {
        match level {
            l if l >= 800 => LevelClass::Extreme,
            l if l >= 500 => LevelClass::High,
            l if l >= 200 => LevelClass::Medium,
            _ => LevelClass::Low,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LevelClass::Low => "low",
            LevelClass::Medium => "medium",
            LevelClass::High => "high",
            LevelClass::Extreme => "extreme",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusZone {
    Safe,
    Warning,
    Danger,
}

impl StatusZone {
    pub fn for_level(level: i32) -> Self {
        match level {
            l if l >= 700 => StatusZone::Danger,
            l if l >= 300 => StatusZone::Warning,
            _ => StatusZone::Safe,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatusZone::Safe => "safe-zone",
            StatusZone::Warning => "warning-zone",
            StatusZone::Danger => "danger-zone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusZone::Safe => "✅ SAFE ZONE",
            StatusZone::Warning => "⚠️ ALERT ZONE",
            StatusZone::Danger => "☢️ EXTREME DANGER!",
        }
    }
}

#[inline]
pub fn device_status_label(running: bool) -> &'static str {
    if running {
        "🟢 On"
    } else {
        "🔴 Off"
    }
}

/// Everything the page shows for one level.
#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    pub text: String,
    pub bar_percent: f64,
    pub level_class: LevelClass,
    pub zone: StatusZone,
}

impl Readout {
    pub fn for_level(level: i32) -> Self {
        Self {
            text: format_reading(level),
            bar_percent: bar_width_percent(level),
            level_class: LevelClass::for_level(level),
            zone: StatusZone::for_level(level),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountFrame {
    Placeholder(u32),
    Final(String),
}

impl CountFrame {
    pub fn text(&self) -> String {
        match self {
            CountFrame::Placeholder(n) => format_reading(*n as i32),
            CountFrame::Final(s) => s.clone(),
        }
    }
}

/// Cosmetic "counting" sequence: a few random placeholders, then the real
/// text.
#[derive(Clone, Debug)]
pub struct CountUp {
    placeholders: Vec<u32>,
    final_text: String,
    step: usize,
}

impl CountUp {
    pub fn new<R: Rng + ?Sized>(final_text: String, rng: &mut R) -> Self {
        let placeholders = (0..COUNT_UP_STEPS)
            .map(|_| rng.gen_range(0..PLACEHOLDER_MAX))
            .collect();
        Self {
            placeholders,
            final_text,
            step: 0,
        }
    }

    /// Delay before frame `index` is shown, counted from the change.
    pub fn delay_for(index: usize) -> i32 {
        COUNT_UP_START_DELAY_MS + index as i32 * COUNT_UP_STEP_MS
    }
}

impl Iterator for CountUp {
    type Item = CountFrame;

    fn next(&mut self) -> Option<CountFrame> {
        let step = self.step;
        self.step += 1;
        match step.cmp(&self.placeholders.len()) {
            std::cmp::Ordering::Less => Some(CountFrame::Placeholder(self.placeholders[step])),
            std::cmp::Ordering::Equal => Some(CountFrame::Final(self.final_text.clone())),
            std::cmp::Ordering::Greater => None,
        }
    }
}

/// How the readout should change after a level update.
#[derive(Clone, Debug)]
pub enum ReadoutUpdate {
    Immediate(String),
    Animated(CountUp),
}

impl ReadoutUpdate {
    pub fn plan<R: Rng + ?Sized>(levels: &LevelStore, threshold: u32, rng: &mut R) -> Self {
        let text = format_reading(levels.level());
        if levels.changed_by() > threshold {
            ReadoutUpdate::Animated(CountUp::new(text, rng))
        } else {
            ReadoutUpdate::Immediate(text)
        }
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self, ReadoutUpdate::Animated(_))
    }
}

/// Generation counter shared by the main readout and its queued animation
/// frames. Every update takes a new generation; a frame queued under an
/// older one must be dropped instead of written.
#[derive(Clone, Debug, Default)]
pub struct ReadoutEpoch {
    current: Rc<Cell<u64>>,
}

impl ReadoutEpoch {
    pub fn advance(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    #[inline]
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.get() == generation
    }
}
