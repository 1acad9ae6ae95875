// Host-side tests for click timbre sampling and the noise envelope.

use geiger_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn timbre_parameters_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..500 {
        let t = ClickTimbre::sample(&mut rng);
        assert!((0.002..0.004).contains(&t.tone.duration_sec));
        assert!((3500.0..4200.0).contains(&t.tone.start_hz));
        assert!((2800.0..3200.0).contains(&t.tone.end_hz));
        assert!(t.tone.end_hz < t.tone.start_hz, "tone must sweep down");
        assert!((15.0..20.0).contains(&t.tone.filter_q));
        assert!((0.25..0.35).contains(&t.tone.peak_gain));
        assert!((0.003..0.006).contains(&t.noise.duration_sec));
        assert!((3000.0..4000.0).contains(&t.noise.filter_hz));
        assert!((8.0..12.0).contains(&t.noise.filter_q));
        assert!((0.8..1.2).contains(&t.noise.gain));
    }
}

#[test]
fn envelope_attacks_then_decays() {
    assert_eq!(noise_envelope(0.0), 0.0);
    assert!((noise_envelope(0.05) - 0.5).abs() < 1e-6);
    assert!((noise_envelope(0.1) - 1.0).abs() < 1e-6);
    assert!((noise_envelope(0.55) - 0.125).abs() < 1e-6);
    assert!(noise_envelope(1.0).abs() < 1e-6);

    let mut prev = noise_envelope(0.1);
    for i in 11..=100 {
        let e = noise_envelope(i as f32 / 100.0);
        assert!(e <= prev, "envelope rose at {i}%");
        prev = e;
    }
}

#[test]
fn noise_buffer_length_follows_sample_rate() {
    assert_eq!(noise_len(0.005, 44100.0), 220);
    assert_eq!(noise_len(0.0, 48000.0), 0);
}

#[test]
fn noise_samples_are_bounded_and_start_silent() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut buf = vec![1.0_f32; 256];
    fill_noise(&mut buf, &mut rng);
    assert_eq!(buf[0].abs(), 0.0);
    assert!(buf.iter().all(|s| s.abs() <= 0.25));
    assert!(buf.iter().any(|s| s.abs() > 0.0));
}
