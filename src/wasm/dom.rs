//! Small helpers over the listener/closure plumbing every feature shares.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, Window};

/// Attach a persistent event listener; the closure is leaked on purpose
/// since all listeners live for the page's lifetime.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// One-shot timer. Returns the handle so callers can cancel it.
pub fn set_timeout(
    window: &Window,
    millis: i32,
    callback: impl FnOnce() + 'static,
) -> Result<i32, JsValue> {
    let closure = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), millis)
}

/// Repeating timer; the closure is leaked like a persistent listener.
pub fn set_interval(
    window: &Window,
    millis: i32,
    callback: impl FnMut() + 'static,
) -> Result<i32, JsValue> {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )?;
    closure.forget();
    Ok(handle)
}

/// All elements matching `selector`, skipping non-element nodes.
pub fn selected(document: &Document, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    elements.push(element);
                }
            }
        }
    }
    elements
}

/// First element matching `selector`, or `None` when the hook is absent.
pub fn select(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}
