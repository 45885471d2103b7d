//! Degrade decorative animation on constrained devices.
//!
//! deviceMemory and getBattery are not universally implemented, so both are
//! reached through `Reflect` and simply skipped when absent.

use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, EventTarget, HtmlElement, Window};

use super::dom;
use crate::device::PageKind;
use crate::perf::{BatteryStatus, DeviceProfile};

pub fn install(window: &Window, document: &Document, kind: PageKind) -> Result<(), JsValue> {
    if prefers_reduced_motion(window) {
        set_animation_duration(document, "0.1s");
        return Ok(());
    }

    let profile = device_profile(window);
    if profile.is_low_end() {
        log::info!("low-end device detected: {profile:?}");
        match kind {
            PageKind::Desktop => {
                set_animation_duration(document, "0.3s");
                if let Some(container) = document.get_element_by_id("particlesContainer") {
                    if let Ok(container) = container.dyn_into::<HtmlElement>() {
                        container.style().set_property("display", "none").ok();
                    }
                }
            }
            PageKind::Mobile => {
                set_animation_duration(document, "0.2s");
                if let Some(canvas) = document.get_element_by_id("matrix") {
                    if let Ok(canvas) = canvas.dyn_into::<HtmlElement>() {
                        canvas.style().set_property("opacity", "0.02").ok();
                    }
                }
            }
        }
    }

    if kind == PageKind::Mobile {
        watch_battery(window, document)?;
    }
    Ok(())
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn set_animation_duration(document: &Document, value: &str) {
    if let Some(root) = document.document_element() {
        if let Ok(root) = root.dyn_into::<HtmlElement>() {
            root.style()
                .set_property("--animation-duration", value)
                .ok();
        }
    }
}

fn device_profile(window: &Window) -> DeviceProfile {
    let navigator = window.navigator();
    let memory_gb = Reflect::get(navigator.as_ref(), &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|value| value.as_f64());
    let cores = match navigator.hardware_concurrency() {
        c if c > 0.0 => Some(c),
        _ => None,
    };
    DeviceProfile { memory_gb, cores }
}

/// Watch the Battery Status API, hiding the rain canvas while charge is low
/// or the device is unplugged and restoring it once conditions recover.
fn watch_battery(window: &Window, document: &Document) -> Result<(), JsValue> {
    let navigator = window.navigator();
    let Some(get_battery) = Reflect::get(navigator.as_ref(), &JsValue::from_str("getBattery"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return Ok(());
    };
    let Ok(promise) = get_battery
        .call0(navigator.as_ref())
        .and_then(|value| value.dyn_into::<Promise>())
    else {
        return Ok(());
    };

    let doc = document.clone();
    spawn_local(async move {
        let Ok(battery) = JsFuture::from(promise).await else {
            return;
        };

        let evaluate: Rc<dyn Fn()> = {
            let battery = battery.clone();
            let doc = doc.clone();
            Rc::new(move || {
                if let Some(status) = battery_status(&battery) {
                    set_rain_visible(&doc, !status.hides_rain());
                }
            })
        };
        evaluate();

        if let Ok(target) = battery.dyn_into::<EventTarget>() {
            for event in ["levelchange", "chargingchange"] {
                let evaluate = evaluate.clone();
                dom::listen(&target, event, move |_| evaluate()).ok();
            }
        }
    });
    Ok(())
}

fn battery_status(battery: &JsValue) -> Option<BatteryStatus> {
    let level = Reflect::get(battery, &JsValue::from_str("level"))
        .ok()?
        .as_f64()?;
    let charging = Reflect::get(battery, &JsValue::from_str("charging"))
        .ok()?
        .as_bool()?;
    Some(BatteryStatus { level, charging })
}

fn set_rain_visible(document: &Document, visible: bool) {
    let Some(canvas) = document.get_element_by_id("matrix") else {
        return;
    };
    let Ok(canvas) = canvas.dyn_into::<HtmlElement>() else {
        return;
    };
    if visible {
        canvas.style().remove_property("display").ok();
    } else {
        canvas.style().set_property("display", "none").ok();
    }
}
