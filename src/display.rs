use crate::constants::*;
use crate::dom;
use geiger_core::constants::COUNT_UP_SETTLE_MS;
use geiger_core::{device_status_label, CountUp, Readout, ReadoutEpoch, ReadoutUpdate};
use web_sys as web;

/// Readouts and controls bound by id.
pub struct Page {
    pub slider: web::HtmlInputElement,
    reading: web::Element,
    slider_label: web::Element,
    bar: web::HtmlElement,
    status_text: web::Element,
    device_status: web::Element,
    epoch: ReadoutEpoch,
}

impl Page {
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        use wasm_bindgen::JsCast;
        let slider = dom::element(document, ID_SLIDER)?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an input: {:?}", ID_SLIDER, e))?;
        Ok(Self {
            slider,
            reading: dom::element(document, ID_READING)?,
            slider_label: dom::element(document, ID_SLIDER_LABEL)?,
            bar: dom::html_element(document, ID_BAR)?,
            status_text: dom::element(document, ID_STATUS_TEXT)?,
            device_status: dom::element(document, ID_DEVICE_STATUS)?,
            epoch: ReadoutEpoch::default(),
        })
    }

    /// Slider value, `None` when it does not parse as an integer.
    pub fn slider_level(&self) -> Option<i32> {
        self.slider.value().trim().parse().ok()
    }

    pub fn set_slider_level(&self, level: i32) {
        self.slider.set_value(&level.to_string());
    }

    pub fn show_level(&self, readout: &Readout, update: ReadoutUpdate) {
        // frames still queued by an earlier animation are now stale
        let generation = self.epoch.advance();
        self.reading.set_class_name(&format!(
            "{} {}",
            CLASS_READING_BASE,
            readout.level_class.css_class()
        ));
        match update {
            ReadoutUpdate::Immediate(text) => self.reading.set_text_content(Some(&text)),
            ReadoutUpdate::Animated(count_up) => {
                animate_count_up(&self.reading, count_up, &self.epoch, generation)
            }
        }
        self.slider_label.set_text_content(Some(&readout.text));
        let _ = self
            .bar
            .style()
            .set_property("width", &format!("{}%", readout.bar_percent));
        self.status_text.set_text_content(Some(readout.zone.label()));
        self.status_text
            .set_class_name(&format!("{} {}", CLASS_STATUS_BASE, readout.zone.css_class()));
    }

    pub fn show_running(&self, running: bool) {
        self.device_status
            .set_text_content(Some(device_status_label(running)));
    }
}

fn animate_count_up(el: &web::Element, count_up: CountUp, epoch: &ReadoutEpoch, generation: u64) {
    let _ = el.class_list().add_1(CLASS_UPDATING);
    let mut last_delay = 0;
    for (i, frame) in count_up.enumerate() {
        let delay = CountUp::delay_for(i);
        last_delay = delay;
        let el = el.clone();
        let epoch = epoch.clone();
        dom::set_timeout(delay, move || {
            if epoch.is_current(generation) {
                el.set_text_content(Some(&frame.text()));
            }
        });
    }
    let el = el.clone();
    let epoch = epoch.clone();
    dom::set_timeout(last_delay + COUNT_UP_SETTLE_MS, move || {
        if epoch.is_current(generation) {
            let _ = el.class_list().remove_1(CLASS_UPDATING);
        }
    });
}
