#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use site_wasm::debounce;
use site_wasm::device::{self, NavigationDecision, ViewportSignals};
use site_wasm::rain::{self, RainConfig};

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(millis: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn signals_from_browser(force_desktop: bool) -> ViewportSignals {
    let window = web_sys::window().unwrap();
    let navigator = window.navigator();
    ViewportSignals {
        ua_mobile: device::ua_matches_mobile(&navigator.user_agent().unwrap_or_default()),
        width: window.inner_width().unwrap().as_f64().unwrap_or(0.0),
        has_touch: navigator.max_touch_points() > 0,
        on_mobile_page: false,
        force_desktop,
    }
}

#[wasm_bindgen_test]
fn force_desktop_always_stays() {
    let signals = signals_from_browser(true);
    assert_eq!(device::decide(&signals), NavigationDecision::Stay);
}

#[wasm_bindgen_test]
fn classifier_runs_against_real_navigator() {
    let signals = signals_from_browser(false);
    // Whatever the harness browser reports, the decision must be coherent
    // with the classifier.
    let expect_redirect = signals.is_mobile();
    assert_eq!(
        device::decide(&signals) == NavigationDecision::RedirectToMobile,
        expect_redirect
    );
}

#[wasm_bindgen_test]
async fn resize_burst_fires_exactly_one_debounced_action() {
    let window = web_sys::window().unwrap();
    let fired = Rc::new(Cell::new(0u32));
    {
        let fired = fired.clone();
        debounce::on_resize(&window, 500, move || fired.set(fired.get() + 1)).unwrap();
    }

    // A burst of resize events inside the quiet period: each one must cancel
    // the previous pending timer.
    for _ in 0..4 {
        let event = web_sys::Event::new("resize").unwrap();
        window.dispatch_event(&event).unwrap();
        sleep(50).await;
    }
    assert_eq!(fired.get(), 0, "fired during the quiet period");

    // Well past the trailing edge of the last event.
    sleep(700).await;
    assert_eq!(fired.get(), 1, "trailing edge must fire exactly once");

    // No further events, no further fires.
    sleep(300).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
fn rain_frame_paints_on_synthetic_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(200);
    canvas.set_height(100);
    document.body().unwrap().append_child(&canvas).unwrap();

    let context: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    let config = RainConfig::desktop();
    context.set_fill_style_str(&config.fade_style());
    context.fill_rect(0.0, 0.0, 200.0, 100.0);
    context.set_fill_style_str(rain::GLYPH_COLOR);
    context.set_font(&config.font());

    let mut cursor = config.initial_cursor(js_sys::Math::random());
    for column in 0..config.column_count(200.0) {
        context
            .fill_text("A", column as f64 * config.glyph_size, cursor * config.glyph_size)
            .unwrap();
        cursor = rain::advance_cursor(cursor, 100.0, &config, js_sys::Math::random);
    }
    assert!(cursor > 1.0);

    canvas.remove();
}

#[wasm_bindgen_test]
fn reveal_class_is_sticky_on_a_real_element() {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_class_name("fade-in");

    // First intersection marks it visible; nothing ever removes the class.
    element.class_list().add_1("visible").unwrap();
    assert!(element.class_list().contains("visible"));
    element.class_list().add_1("visible").unwrap();
    assert!(element.class_list().contains("visible"));
}
