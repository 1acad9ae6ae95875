//! Self-rescheduling click loop.
//!
//! The loop runs once per host frame and fires a tick whenever the monotonic
//! clock reaches the current deadline. Each tick resamples the cadence from
//! the level at that moment, so a level change applies to the next tick.

use crate::cadence;
use crate::constants::IDLE_REPOLL_MS;
use rand::Rng;

/// Source of frame callbacks (requestAnimationFrame on the web).
pub trait FrameHost {
    type Handle;

    /// Ask for one more frame callback. `None` when the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    Stopped,
    Running,
}

/// Run flag, next deadline (ms on the session clock) and the pending frame.
#[derive(Debug)]
pub struct RunState<H> {
    pub running: bool,
    pub next_tick_deadline: Option<f64>,
    pub pending: Option<H>,
}

impl<H> Default for RunState<H> {
    fn default() -> Self {
        Self {
            running: false,
            next_tick_deadline: None,
            pending: None,
        }
    }
}

/// Outcome of one frame callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Loop is stopped; no further frame was requested.
    Halted,
    /// Deadline not reached yet.
    Waiting,
    /// Deadline reached with level <= 0; re-polls after the idle interval.
    Idle,
    /// Deadline reached; the tick callback must run once.
    Tick { level: i32, next_in_ms: f64 },
}

impl FrameOutcome {
    #[inline]
    pub fn is_tick(&self) -> bool {
        matches!(self, FrameOutcome::Tick { .. })
    }
}

pub struct ClickScheduler<F: FrameHost> {
    host: F,
    state: RunState<F::Handle>,
}

impl<F: FrameHost> ClickScheduler<F> {
    pub fn new(host: F) -> Self {
        Self {
            host,
            state: RunState::default(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        if self.state.running {
            RunPhase::Running
        } else {
            RunPhase::Stopped
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn state(&self) -> &RunState<F::Handle> {
        &self.state
    }

    pub fn host(&self) -> &F {
        &self.host
    }

    /// Stopped -> Running. Returns false (and schedules nothing) when already
    /// running.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        self.state.running = true;
        self.state.next_tick_deadline = None;
        self.state.pending = self.host.request_frame();
        true
    }

    /// Unconditionally stops, clears the deadline and cancels the pending
    /// frame request.
    pub fn stop(&mut self) {
        self.state.running = false;
        self.state.next_tick_deadline = None;
        if let Some(handle) = self.state.pending.take() {
            self.host.cancel_frame(handle);
        }
    }

    /// Body of the frame callback. `now_ms` comes from the monotonic session
    /// clock.
    pub fn on_frame<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        level: i32,
        rng: &mut R,
    ) -> FrameOutcome {
        // this frame was the pending one
        self.state.pending = None;
        if !self.state.running {
            return FrameOutcome::Halted;
        }
        let deadline = *self.state.next_tick_deadline.get_or_insert(now_ms);
        let outcome = if now_ms >= deadline {
            match cadence::click_interval(level, rng) {
                Some(next_in_ms) => {
                    self.state.next_tick_deadline = Some(now_ms + next_in_ms);
                    FrameOutcome::Tick { level, next_in_ms }
                }
                None => {
                    self.state.next_tick_deadline = Some(now_ms + IDLE_REPOLL_MS);
                    FrameOutcome::Idle
                }
            }
        } else {
            FrameOutcome::Waiting
        };
        self.state.pending = self.host.request_frame();
        outcome
    }
}
