//! Desktop→mobile redirection, plus the mobile page's way back.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::dom;
use crate::debounce;
use crate::device::{self, NavigationDecision, ViewportSignals};

/// Trailing-edge quiet period for resize re-checks.
const RESIZE_DEBOUNCE_MS: i32 = 500;

/// Grace before the initial-load navigation fires.
const INITIAL_REDIRECT_DELAY_MS: i32 = 100;

/// Run the initial check and arm the debounced resize re-check.
pub fn install(window: &Window) -> Result<(), JsValue> {
    if decide(window) == NavigationDecision::RedirectToMobile {
        let win = window.clone();
        dom::set_timeout(window, INITIAL_REDIRECT_DELAY_MS, move || {
            navigate_to_mobile(&win);
        })?;
    }

    let win = window.clone();
    debounce::on_resize(window, RESIZE_DEBOUNCE_MS, move || {
        if decide(&win) == NavigationDecision::RedirectToMobile {
            navigate_to_mobile(&win);
        }
    })
}

fn decide(window: &Window) -> NavigationDecision {
    device::decide(&signals(window))
}

/// Sample the environment fresh; nothing here is cached across checks.
fn signals(window: &Window) -> ViewportSignals {
    let navigator = window.navigator();
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();

    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let has_touch = Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || navigator.max_touch_points() > 0;

    ViewportSignals {
        ua_mobile: device::ua_matches_mobile(&navigator.user_agent().unwrap_or_default()),
        width,
        has_touch,
        on_mobile_page: device::on_mobile_page(&pathname, &search),
        force_desktop: device::force_desktop(&search),
    }
}

/// Terminal side effect: abandons the current page.
fn navigate_to_mobile(window: &Window) {
    let location = window.location();
    let url = device::mobile_url(
        &location.pathname().unwrap_or_default(),
        &location.search().unwrap_or_default(),
        &location.hash().unwrap_or_default(),
    );
    log::info!("redirecting to mobile variant: {url}");
    if let Err(err) = location.set_href(&url) {
        log::warn!("navigation failed: {err:?}");
    }
}

/// On the mobile page, "view desktop version" links confirm first and tag the
/// target URL so the redirector leaves the desktop page alone.
pub fn desktop_links(window: &Window, document: &Document) -> Result<(), JsValue> {
    for link in dom::selected(document, r#"a[href="index.html"]"#) {
        let win = window.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event| {
            let confirmed = win
                .confirm_with_message(
                    "Switch to the desktop version? It may render poorly on this device.",
                )
                .unwrap_or(false);
            if confirmed {
                anchor
                    .set_attribute("href", "index.html?force_desktop=true")
                    .ok();
            } else {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}
