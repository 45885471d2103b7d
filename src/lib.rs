#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Client-side behaviour for the debate-event site: device-based redirection
//! between the desktop and mobile pages, the matrix-rain canvas, scroll
//! reveal animations, the mobile navigation drawer, and power heuristics.
//!
//! Decision logic is kept in pure modules so it tests on the host; the
//! browser wiring only compiles for wasm32.

pub mod device;
pub mod menu;
pub mod perf;
pub mod rain;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod debounce;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::device::{self, PageKind};

    mod dom;
    mod loader;
    mod menu;
    mod particles;
    mod perf;
    mod rain;
    mod redirect;
    mod reveal;
    mod scroll;
    mod touch;
    mod typing;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        let kind = device::page_kind(&pathname, &search);
        log::info!("site booting as {kind:?}");

        match kind {
            PageKind::Desktop => {
                redirect::install(&window)?;
                loader::install(&window, &document)?;
                rain::start(&window, &document, kind)?;
                scroll::smooth_anchors(&window, &document, kind)?;
                reveal::install(&document, kind)?;
                typing::install(&window, &document)?;
                menu::install(&window, &document, kind)?;
                scroll::progress_bar(&window, &document)?;
                particles::install(&window, &document)?;
                scroll::navbar_autohide(&window, &document)?;
                scroll::shortcuts(&window, &document)?;
            }
            PageKind::Mobile => {
                rain::start(&window, &document, kind)?;
                menu::install(&window, &document, kind)?;
                scroll::smooth_anchors(&window, &document, kind)?;
                reveal::install(&document, kind)?;
                touch::install(&window, &document)?;
                redirect::desktop_links(&window, &document)?;
            }
        }

        perf::install(&window, &document, kind)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g. `cargo test` on host), provide an
// empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
