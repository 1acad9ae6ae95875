use crate::constants::*;
use crate::dom;
use geiger_core::constants::{
    BAR_FLASH_MS, DISTORTION_MS, GLITCH_PULSE_MS, PARTICLE_ACTIVATE_MS, SHAKE_MS,
};
use geiger_core::{ClickPlan, GlitchPlan, ParticleSpec, VisualSink};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page layers the click and ambient effects toggle.
#[derive(Clone)]
pub struct PageEffects {
    document: web::Document,
    body: web::HtmlElement,
    glitch_overlay: web::Element,
    distortion: web::Element,
    bar: web::Element,
    particle_parent: Option<web::Element>,
}

impl PageEffects {
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let particle_parent = document
            .query_selector(PARTICLE_PARENT_SELECTOR)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if particle_parent.is_none() {
            log::warn!("[effects] no {} element, particles disabled", PARTICLE_PARENT_SELECTOR);
        }
        Ok(Self {
            document: document.clone(),
            body,
            glitch_overlay: dom::element(document, ID_GLITCH_OVERLAY)?,
            distortion: dom::element(document, ID_DISTORTION)?,
            bar: dom::element(document, ID_BAR)?,
            particle_parent,
        })
    }

    pub fn glitch(&self, plan: GlitchPlan) {
        dom::pulse_class(&self.glitch_overlay, CLASS_ACTIVE, GLITCH_PULSE_MS);
        if plan.distortion {
            dom::pulse_class(&self.distortion, CLASS_ACTIVE, DISTORTION_MS);
        }
    }

    pub fn set_noise_opacity(&self, opacity: f32) {
        let _ = self
            .body
            .style()
            .set_property(PROP_NOISE_OPACITY, &opacity.to_string());
    }

    fn spawn_particle(&self, spec: ParticleSpec) {
        let Some(parent) = self.particle_parent.clone() else {
            return;
        };
        let particle = match self
            .document
            .create_element("div")
            .map(|el| el.dyn_into::<web::HtmlElement>())
        {
            Ok(Ok(el)) => el,
            _ => {
                log::error!("[effects] could not create particle element");
                return;
            }
        };
        particle.set_class_name(&format!("{} {}", CLASS_PARTICLE, spec.size.css_class()));
        let style = particle.style();
        let _ = style.set_property("left", &format!("{}%", spec.start_x_pct));
        let _ = style.set_property("bottom", PARTICLE_BOTTOM);
        let _ = style.set_property(PROP_DRIFT, &format!("{}px", spec.drift_px));
        let _ = style.set_property(PROP_DRIFT_END, &format!("{}px", spec.drift_end_px));
        let _ = style.set_property(PROP_DURATION, &format!("{}s", spec.lifetime_sec));
        if let Err(e) = parent.append_child(&particle) {
            log::error!("[effects] append particle error: {:?}", e);
            return;
        }

        let activate = particle.clone();
        dom::set_timeout(PARTICLE_ACTIVATE_MS, move || {
            let _ = activate.class_list().add_1(CLASS_ACTIVE);
        });
        dom::set_timeout(spec.remove_after_ms(), move || {
            if particle.parent_node().is_some() {
                particle.remove();
            }
        });
    }
}

impl VisualSink for PageEffects {
    fn show_click(&mut self, plan: &ClickPlan) {
        if plan.shake {
            dom::pulse_class(&self.body, CLASS_SHAKE, SHAKE_MS);
        }
        if let Some(glitch) = plan.glitch {
            self.glitch(glitch);
        }
        for spec in plan.particles.iter().copied() {
            let page = self.clone();
            dom::set_timeout(spec.spawn_delay_ms, move || page.spawn_particle(spec));
        }
        if plan.bar_flash {
            dom::pulse_class(&self.bar, CLASS_ANIMATED, BAR_FLASH_MS);
        }
    }
}
