// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure front-end module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use geiger_core::constants as core_constants;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        ID_SLIDER,
        ID_START_BUTTON,
        ID_STOP_BUTTON,
        ID_RESET_BUTTON,
        ID_TEST_BUTTON,
        ID_READING,
        ID_SLIDER_LABEL,
        ID_BAR,
        ID_STATUS_TEXT,
        ID_DEVICE_STATUS,
        ID_GLITCH_OVERLAY,
        ID_DISTORTION,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "ids are passed without the hash: {a}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn custom_properties_are_css_variables() {
    for prop in [PROP_NOISE_OPACITY, PROP_DRIFT, PROP_DRIFT_END, PROP_DURATION] {
        assert!(prop.starts_with("--"), "{prop}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scheduler_constants_are_consistent() {
    assert!(core_constants::MIN_CADENCE_MS > 0.0);
    assert!(core_constants::MIN_CADENCE_MS < core_constants::IDLE_REPOLL_MS);
    assert!(
        core_constants::AMBIENT_GLITCH_DELAY_MIN_MS < core_constants::AMBIENT_GLITCH_DELAY_MAX_MS
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_thresholds_are_ordered() {
    // a click glitch must be able to pass the glitch level gate
    assert!(core_constants::CLICK_GLITCH_LEVEL >= core_constants::GLITCH_MIN_LEVEL);
    assert!(core_constants::DISTORTION_LEVEL >= core_constants::GLITCH_MIN_LEVEL);
    assert!(core_constants::SHAKE_LEVEL <= core_constants::LEVEL_MAX);
    assert!(
        core_constants::PARTICLE_MAX as i32 * core_constants::PARTICLE_LEVEL_STEP
            <= core_constants::LEVEL_MAX
    );
    for p in [
        core_constants::CLICK_GLITCH_CHANCE,
        core_constants::PARTICLE_CHANCE,
        core_constants::DISTORTION_CHANCE,
    ] {
        assert!(p > 0.0 && p < 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn count_up_finishes_quickly() {
    let total = core_constants::COUNT_UP_START_DELAY_MS
        + core_constants::COUNT_UP_STEPS as i32 * core_constants::COUNT_UP_STEP_MS
        + core_constants::COUNT_UP_SETTLE_MS;
    assert!(total < 1000);
    assert!(DOUBLE_TAP_MS > 0.0);
}
