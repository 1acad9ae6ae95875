// Host-side tests for fanning one tick out to the effect producers.

use geiger_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Visual(ClickPlan),
    Haptic(Vec<u32>),
    Sound(ClickTimbre),
}

type Log = Rc<RefCell<Vec<Call>>>;

struct Recorder(Log);

impl VisualSink for Recorder {
    fn show_click(&mut self, plan: &ClickPlan) {
        self.0.borrow_mut().push(Call::Visual(plan.clone()));
    }
}

impl HapticSink for Recorder {
    fn vibrate(&mut self, pattern: &[u32]) {
        self.0.borrow_mut().push(Call::Haptic(pattern.to_vec()));
    }
}

impl SoundSink for Recorder {
    fn play_click(&mut self, timbre: &ClickTimbre) {
        self.0.borrow_mut().push(Call::Sound(*timbre));
    }
}

fn dispatcher() -> (EffectDispatcher<Recorder, Recorder, Recorder>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let d = EffectDispatcher::new(
        Recorder(log.clone()),
        Recorder(log.clone()),
        Recorder(log.clone()),
    );
    (d, log)
}

#[test]
fn producers_fire_visual_haptic_audio_in_order() {
    let (mut d, log) = dispatcher();
    let mut rng = StdRng::seed_from_u64(1);
    let report = d.dispatch(450, &mut rng);

    let calls = log.borrow();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Call::Visual(report.plan.clone()));
    assert_eq!(calls[1], Call::Haptic(vec![60, 30, 60]));
    assert_eq!(calls[2], Call::Sound(report.timbre));
    assert_eq!(report.level, 450);
    assert_eq!(report.pattern, vibration_pattern(450));
}

#[test]
fn each_tick_reads_the_level_it_is_given() {
    let (mut d, log) = dispatcher();
    let mut rng = StdRng::seed_from_u64(2);
    d.dispatch(50, &mut rng);
    d.dispatch(900, &mut rng);

    let patterns: Vec<Vec<u32>> = log
        .borrow()
        .iter()
        .filter_map(|c| match c {
            Call::Haptic(p) => Some(p.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(patterns, vec![vec![20], vec![100, 50, 100, 50, 150]]);
}

#[test]
fn same_seed_same_effects() {
    let (mut a, _) = dispatcher();
    let (mut b, _) = dispatcher();
    let mut ra = StdRng::seed_from_u64(77);
    let mut rb = StdRng::seed_from_u64(77);
    for level in [120, 480, 760, 990] {
        assert_eq!(a.dispatch(level, &mut ra), b.dispatch(level, &mut rb));
    }
}
