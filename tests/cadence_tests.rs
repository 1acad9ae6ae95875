// Host-side tests for the level -> click cadence mapping.

use geiger_core::constants::{IDLE_REPOLL_MS, MIN_CADENCE_MS};
use geiger_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BRACKETS: &[(i32, i32, f64, f64)] = &[
    (1, 49, 1500.0, 3500.0),
    (50, 99, 800.0, 2000.0),
    (100, 199, 400.0, 1000.0),
    (200, 299, 200.0, 600.0),
    (300, 499, 100.0, 300.0),
    (500, 699, 50.0, 150.0),
    (700, 899, 25.0, 75.0),
    (900, 1000, 10.0, 35.0),
];

#[test]
fn zero_and_negative_levels_have_no_cadence() {
    let mut rng = StdRng::seed_from_u64(1);
    for level in [0, -1, -500, i32::MIN] {
        assert_eq!(cadence_range(level), None);
        assert_eq!(click_interval(level, &mut rng), None);
    }
    assert_eq!(IDLE_REPOLL_MS, 100.0);
}

#[test]
fn bracket_edges_pick_the_expected_range() {
    for &(lo, hi, min_ms, max_ms) in BRACKETS {
        for level in [lo, hi] {
            let r = cadence_range(level).expect("positive level has a range");
            assert_eq!((r.min_ms, r.max_ms), (min_ms, max_ms), "level {level}");
        }
    }
    // far above the slider range still lands in the top bracket
    let r = cadence_range(50_000).unwrap();
    assert_eq!((r.min_ms, r.max_ms), (10.0, 35.0));
}

#[test]
fn samples_stay_inside_their_bracket() {
    let mut rng = StdRng::seed_from_u64(7);
    for &(lo, hi, min_ms, max_ms) in BRACKETS {
        for level in [lo, (lo + hi) / 2, hi] {
            for _ in 0..200 {
                let raw = sample_raw(level, &mut rng).unwrap();
                assert!(
                    raw >= min_ms && raw < max_ms,
                    "level {level}: {raw} outside [{min_ms}, {max_ms})"
                );
            }
        }
    }
}

#[test]
fn final_interval_is_raw_sample_with_floor() {
    for level in [10, 150, 650, 850, 950] {
        let mut a = StdRng::seed_from_u64(level as u64);
        let mut b = StdRng::seed_from_u64(level as u64);
        for _ in 0..200 {
            let raw = sample_raw(level, &mut a).unwrap();
            let interval = click_interval(level, &mut b).unwrap();
            assert_eq!(interval, raw.max(MIN_CADENCE_MS));
        }
    }
}

#[test]
fn level_850_over_many_ticks() {
    let mut rng = StdRng::seed_from_u64(850);
    let range = cadence_range(850).unwrap();
    for _ in 0..1000 {
        let raw = sample_raw(850, &mut rng).unwrap();
        assert!((range.min_ms..range.max_ms).contains(&raw));
        assert!(raw.max(MIN_CADENCE_MS) >= 20.0);
    }
}

#[test]
fn top_bracket_is_floored_at_twenty() {
    let mut raw_rng = StdRng::seed_from_u64(950);
    let mut rng = StdRng::seed_from_u64(950);
    let mut floored = 0;
    for _ in 0..1000 {
        let raw = sample_raw(950, &mut raw_rng).unwrap();
        let interval = click_interval(950, &mut rng).unwrap();
        assert!((10.0..35.0).contains(&raw));
        assert!((20.0..35.0).contains(&interval));
        if raw < MIN_CADENCE_MS {
            assert_eq!(interval, 20.0);
            floored += 1;
        }
    }
    assert!(floored > 0, "expected some samples below the floor");
}

#[test]
fn cadence_shrinks_as_level_rises() {
    let mut prev = cadence_range(1).unwrap();
    for level in [50, 100, 200, 300, 500, 700, 900] {
        let r = cadence_range(level).unwrap();
        assert!(r.max_ms < prev.max_ms, "max not decreasing at {level}");
        assert!(r.min_ms < prev.min_ms, "min not decreasing at {level}");
        prev = r;
    }
}
