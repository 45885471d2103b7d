//! One-shot scroll reveal: elements gain `visible` the first time they
//! intersect the viewport and are never observed again.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom;
use crate::device::PageKind;

const REVEAL_THRESHOLD: f64 = 0.1;

struct RevealPlan {
    selector: &'static str,
    root_margin: &'static str,
    /// Mobile markup carries no animation classes; tag targets on the way in.
    prime_fade_in: bool,
}

fn plan_for(kind: PageKind) -> RevealPlan {
    match kind {
        PageKind::Desktop => RevealPlan {
            selector: ".fade-in, .slide-in-left, .slide-in-right, .scale-in",
            root_margin: "0px 0px -50px 0px",
            prime_fade_in: false,
        },
        PageKind::Mobile => RevealPlan {
            selector: ".mobile-section, .topic-card, .team, .rule-item, .mobile-survey-container",
            root_margin: "0px 0px -20px 0px",
            prime_fade_in: true,
        },
    }
}

pub fn install(document: &Document, kind: PageKind) -> Result<(), JsValue> {
    let plan = plan_for(kind);
    let targets = dom::selected(document, plan.selector);
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    target.class_list().add_1("visible").ok();
                    // Irreversible: leaving the viewport never reverts it.
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(plan.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in targets {
        if plan.prime_fade_in {
            element.class_list().add_1("fade-in").ok();
        }
        observer.observe(&element);
    }
    Ok(())
}
