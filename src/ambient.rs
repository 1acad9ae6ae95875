use crate::dom;
use crate::effects::PageEffects;
use crate::frame::Device;
use geiger_core::constants::NOISE_INTERVAL_MS;
use geiger_core::{next_glitch_delay_ms, AmbientGate};
use std::cell::RefCell;
use std::rc::Rc;

/// Background glitch and noise loops. They live for the whole session; the
/// gate decides per firing whether the run state lets them act.
pub fn start(device: Rc<RefCell<Device>>, effects: PageEffects, gate: AmbientGate) {
    schedule_glitch(device.clone(), effects.clone(), gate);

    dom::set_interval(NOISE_INTERVAL_MS, move || {
        let (running, level) = {
            let d = device.borrow();
            (d.is_running(), d.level())
        };
        if let Some(opacity) = gate.noise(running, level) {
            effects.set_noise_opacity(opacity);
        }
    });
}

fn schedule_glitch(device: Rc<RefCell<Device>>, effects: PageEffects, gate: AmbientGate) {
    let delay = next_glitch_delay_ms(device.borrow_mut().rng_mut());
    dom::set_timeout(delay as i32, move || {
        let glitch = {
            let mut d = device.borrow_mut();
            let (running, level) = (d.is_running(), d.level());
            gate.glitch(running, level, d.rng_mut())
        };
        if let Some(plan) = glitch {
            log::debug!("[ambient] glitch distortion={}", plan.distortion);
            effects.glitch(plan);
        }
        schedule_glitch(device, effects, gate);
    });
}
