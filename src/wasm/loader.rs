//! First-visit loading animation, skipped on revisits within the session.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, PerformanceNavigation, Window};

use super::dom;

const SESSION_KEY: &str = "hasVisitedMain";
const LOADER_HOLD_MS: i32 = 1000;
const LOADER_FADE_MS: i32 = 500;
const STAGGER_STEP_MS: i32 = 100;

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id("pageLoader") else {
        log::debug!("loader: #pageLoader missing, skipping");
        return Ok(());
    };
    let loader: HtmlElement = element.dyn_into()?;

    if is_revisit(window, document) {
        loader.style().set_property("display", "none").ok();
        stagger_reveal(window, document)?;
        return Ok(());
    }

    mark_visited(window);
    let win = window.clone();
    let doc = document.clone();
    dom::set_timeout(window, LOADER_HOLD_MS, move || {
        loader.class_list().add_1("hidden").ok();
        let inner_win = win.clone();
        dom::set_timeout(&win, LOADER_FADE_MS, move || {
            loader.style().set_property("display", "none").ok();
            stagger_reveal(&inner_win, &doc).ok();
        })
        .ok();
    })?;
    Ok(())
}

/// Returning from another page of the site, a back/forward navigation, or a
/// repeat visit within this session.
fn is_revisit(window: &Window, document: &Document) -> bool {
    let referrer = document.referrer();
    let hostname = window.location().hostname().unwrap_or_default();
    let from_own_page = referrer.contains("detail.html")
        || referrer.contains("mobile.html")
        || (!hostname.is_empty() && referrer.contains(&hostname));

    let back_forward = window.performance().is_some_and(|perf| {
        perf.navigation().type_() == PerformanceNavigation::TYPE_BACK_FORWARD
    });

    from_own_page || back_forward || has_session_marker(window)
}

fn has_session_marker(window: &Window) -> bool {
    window
        .session_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())
        .is_some()
}

fn mark_visited(window: &Window) {
    if let Ok(Some(storage)) = window.session_storage() {
        storage.set_item(SESSION_KEY, "true").ok();
    }
}

/// Reveal the animatable elements one after another.
fn stagger_reveal(window: &Window, document: &Document) -> Result<(), JsValue> {
    let elements = dom::selected(
        document,
        ".fade-in, .slide-in-left, .slide-in-right, .scale-in",
    );
    for (index, element) in elements.into_iter().enumerate() {
        dom::set_timeout(window, index as i32 * STAGGER_STEP_MS, move || {
            element.class_list().add_1("visible").ok();
        })?;
    }
    Ok(())
}
