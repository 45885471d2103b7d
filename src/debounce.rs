//! Trailing-edge debounce over window resize events.
//!
//! The action is injected so the cancellation behaviour can be exercised in
//! browser tests without navigating anywhere.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

/// Run `action` once per burst of resize events, after `quiet_ms` with no
/// further event. Every new event cancels the pending timer, so only the
/// trailing edge fires.
pub fn on_resize(
    window: &Window,
    quiet_ms: i32,
    action: impl Fn() + 'static,
) -> Result<(), JsValue> {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let action = Rc::new(action);
    let win = window.clone();

    let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(handle) = pending.take() {
            win.clear_timeout_with_handle(handle);
        }
        let inner_pending = pending.clone();
        let action = action.clone();
        let callback = Closure::once_into_js(move || {
            inner_pending.set(None);
            action();
        });
        if let Ok(handle) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            quiet_ms,
        ) {
            pending.set(Some(handle));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}
