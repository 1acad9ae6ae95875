//! Level store and click scheduler behind one handle.

use crate::level::LevelStore;
use crate::scheduler::{ClickScheduler, FrameHost, FrameOutcome};
use rand::Rng;

pub struct GeigerDevice<F: FrameHost, R: Rng> {
    levels: LevelStore,
    scheduler: ClickScheduler<F>,
    rng: R,
}

impl<F: FrameHost, R: Rng> GeigerDevice<F, R> {
    pub fn new(host: F, rng: R) -> Self {
        Self {
            levels: LevelStore::default(),
            scheduler: ClickScheduler::new(host),
            rng,
        }
    }

    pub fn set_level(&mut self, level: i32) {
        self.levels.set_level(level);
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.levels.level()
    }

    #[inline]
    pub fn last_level(&self) -> i32 {
        self.levels.last_level()
    }

    pub fn levels(&self) -> &LevelStore {
        &self.levels
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn scheduler(&self) -> &ClickScheduler<F> {
        &self.scheduler
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn start(&mut self) -> bool {
        let started = self.scheduler.start();
        if started {
            log::info!("[device] started at level {}", self.levels.level());
        }
        started
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
        log::info!("[device] stopped");
    }

    /// Stop, then zero both the current and the previous level.
    pub fn reset(&mut self) {
        self.stop();
        self.levels.reset();
    }

    /// Frame callback body; the level is read at this moment.
    pub fn on_frame(&mut self, now_ms: f64) -> FrameOutcome {
        let level = self.levels.level();
        self.scheduler.on_frame(now_ms, level, &mut self.rng)
    }
}
