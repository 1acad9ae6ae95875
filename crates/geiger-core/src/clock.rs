use instant::Instant;

/// Monotonic milliseconds since the session started.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}
