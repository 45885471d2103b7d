//! Floating background particles, spawned on a timer and garbage-collected
//! after their CSS animation has certainly finished.

use js_sys::Math;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::dom;

const SPAWN_INTERVAL_MS: i32 = 500;
const PARTICLE_LIFETIME_MS: i32 = 20_000;

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id("particlesContainer") else {
        return Ok(());
    };

    let win = window.clone();
    let doc = document.clone();
    dom::set_interval(window, SPAWN_INTERVAL_MS, move || {
        let Ok(element) = doc.create_element("div") else {
            return;
        };
        element.set_class_name("particle");

        if let Some(particle) = element.dyn_ref::<HtmlElement>() {
            let style = particle.style();
            style
                .set_property("left", &format!("{}%", Math::random() * 100.0))
                .ok();
            style
                .set_property("animation-delay", &format!("{}s", Math::random() * 10.0))
                .ok();
            style
                .set_property(
                    "animation-duration",
                    &format!("{}s", Math::random() * 10.0 + 10.0),
                )
                .ok();
        }

        if container.append_child(&element).is_err() {
            return;
        }
        dom::set_timeout(&win, PARTICLE_LIFETIME_MS, move || element.remove()).ok();
    })?;
    Ok(())
}
