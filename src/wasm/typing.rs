//! Typewriter effect for the main title.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::dom;
use crate::typing::Typewriter;

const START_DELAY_MS: i32 = 1500;
const CHAR_DELAY_MS: i32 = 120;
const CURSOR_LINGER_MS: i32 = 2000;

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(element) = dom::select(document, ".main-title") else {
        return Ok(());
    };
    let Ok(title) = element.dyn_into::<HtmlElement>() else {
        return Ok(());
    };

    let mut writer = Typewriter::new(&title.text_content().unwrap_or_default());
    title.set_text_content(Some(""));
    title
        .style()
        .set_property("border-right", "2px solid var(--matrix-green)")
        .ok();
    title.style().set_property("padding-right", "5px").ok();

    // Self-rescheduling step closure, same shape as the animation loop.
    let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let win = window.clone();
    let step_inner = step.clone();
    *step.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(typed) = writer.step() {
            title.set_text_content(Some(typed));
            if let Some(callback) = step_inner.borrow().as_ref() {
                win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    CHAR_DELAY_MS,
                )
                .ok();
            }
        } else {
            let done_title = title.clone();
            dom::set_timeout(&win, CURSOR_LINGER_MS, move || {
                done_title.style().set_property("border-right", "none").ok();
                done_title.style().set_property("padding-right", "0").ok();
            })
            .ok();
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = step.borrow().as_ref() {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            START_DELAY_MS,
        )?;
    }
    Ok(())
}
