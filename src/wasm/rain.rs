//! Canvas wiring for the matrix-rain effect.
//!
//! Desktop ticks on a fixed wall-clock interval; mobile rides the display
//! refresh callback but gates painting to ~20 Hz and pauses entirely while
//! the page is hidden.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Math;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::dom;
use crate::device::PageKind;
use crate::rain::{self, RainConfig, GLYPH_COLOR};

pub fn start(window: &Window, document: &Document, kind: PageKind) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id("matrix") else {
        log::debug!("rain: #matrix canvas missing, skipping");
        return Ok(());
    };
    let canvas: HtmlCanvasElement = element.dyn_into()?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    fit_to_viewport(&canvas, window);
    {
        // Resizing only re-measures the canvas; the columns array is left
        // alone, so extreme resizes drift until the next reload.
        let canvas = canvas.clone();
        let win = window.clone();
        dom::listen(window, "resize", move |_| fit_to_viewport(&canvas, &win))?;
    }

    let config = match kind {
        PageKind::Desktop => RainConfig::desktop(),
        PageKind::Mobile => RainConfig::mobile(),
    };
    let interval = config.frame_interval_ms;
    let glyphs: Vec<char> = config.alphabet.chars().collect();
    let mut cursors: Vec<f64> = (0..config.column_count(canvas.width() as f64))
        .map(|_| config.initial_cursor(Math::random()))
        .collect();

    let tick = {
        let canvas = canvas.clone();
        move || draw_frame(&context, &canvas, &config, &glyphs, &mut cursors)
    };

    match kind {
        PageKind::Desktop => {
            dom::set_interval(window, interval as i32, tick)?;
        }
        PageKind::Mobile => start_frame_loop(window, document, tick, interval)?,
    }
    Ok(())
}

fn fit_to_viewport(canvas: &HtmlCanvasElement, window: &Window) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn draw_frame(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    config: &RainConfig,
    glyphs: &[char],
    cursors: &mut [f64],
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Low-opacity wash fades the previous glyphs into the trail.
    context.set_fill_style_str(&config.fade_style());
    context.fill_rect(0.0, 0.0, width, height);

    context.set_fill_style_str(GLYPH_COLOR);
    context.set_font(&config.font());

    let mut buf = [0u8; 4];
    for (column, cursor) in cursors.iter_mut().enumerate() {
        let glyph = glyphs[(Math::random() * glyphs.len() as f64) as usize % glyphs.len()];
        context
            .fill_text(
                glyph.encode_utf8(&mut buf),
                column as f64 * config.glyph_size,
                *cursor * config.glyph_size,
            )
            .ok();
        *cursor = rain::advance_cursor(*cursor, height, config, Math::random);
    }
}

/// Animation-frame loop with a frame-interval gate and visibility pause.
fn start_frame_loop(
    window: &Window,
    document: &Document,
    tick: impl FnMut() + 'static,
    interval: f64,
) -> Result<(), JsValue> {
    // The closure re-requests itself, so it is stored behind Rc<RefCell> and
    // referenced from within its own body.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let mut last_painted = 0.0f64;
    let win = window.clone();
    let frame_inner = frame.clone();
    let handle_inner = handle.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if now - last_painted >= interval {
            tick();
            last_painted = now;
        }
        if let Some(callback) = frame_inner.borrow().as_ref() {
            if let Ok(id) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                handle_inner.set(Some(id));
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        handle.set(Some(id));
    }

    // Hidden page: cancel the pending frame. Visible again: re-request one,
    // unless the loop is somehow still armed.
    let win = window.clone();
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_| {
        if doc.hidden() {
            if let Some(id) = handle.take() {
                win.cancel_animation_frame(id).ok();
            }
        } else if handle.get().is_none() {
            if let Some(callback) = frame.borrow().as_ref() {
                if let Ok(id) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    handle.set(Some(id));
                }
            }
        }
    })
}
