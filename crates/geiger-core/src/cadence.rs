//! Level to click-cadence mapping.
//!
//! Higher levels draw from shorter, narrower interval ranges so the click
//! rate rises with the level while every interval stays independently random.

use crate::constants::MIN_CADENCE_MS;
use rand::Rng;

/// Half-open millisecond range `[min_ms, max_ms)` an interval is drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CadenceRange {
    pub min_ms: f64,
    pub max_ms: f64,
}

impl CadenceRange {
    const fn new(min_ms: f64, max_ms: f64) -> Self {
        Self { min_ms, max_ms }
    }
}

// (exclusive upper level bound, range); the last row catches everything else
const BRACKETS: [(i32, CadenceRange); 7] = [
    (50, CadenceRange::new(1500.0, 3500.0)),
    (100, CadenceRange::new(800.0, 2000.0)),
    (200, CadenceRange::new(400.0, 1000.0)),
    (300, CadenceRange::new(200.0, 600.0)),
    (500, CadenceRange::new(100.0, 300.0)),
    (700, CadenceRange::new(50.0, 150.0)),
    (900, CadenceRange::new(25.0, 75.0)),
];
const TOP_RANGE: CadenceRange = CadenceRange::new(10.0, 35.0);

/// Range used for `level`, or `None` when the level produces no clicks.
pub fn cadence_range(level: i32) -> Option<CadenceRange> {
    if level <= 0 {
        return None;
    }
    let range = BRACKETS
        .iter()
        .find(|(bound, _)| level < *bound)
        .map(|(_, r)| *r)
        .unwrap_or(TOP_RANGE);
    Some(range)
}

/// Draw the raw interval for `level` before the floor is applied.
pub fn sample_raw<R: Rng + ?Sized>(level: i32, rng: &mut R) -> Option<f64> {
    cadence_range(level).map(|r| rng.gen_range(r.min_ms..r.max_ms))
}

/// Milliseconds until the next click, never below [`MIN_CADENCE_MS`].
pub fn click_interval<R: Rng + ?Sized>(level: i32, rng: &mut R) -> Option<f64> {
    sample_raw(level, rng).map(|ms| ms.max(MIN_CADENCE_MS))
}
