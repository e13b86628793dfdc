//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::core::error::BindError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Look up an element by id.
pub fn element_by_id(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(id.to_string()))
}

/// Look up an HTML element by id (needed for inline style access).
pub fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, BindError> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindError::WrongElementType {
            id: id.to_string(),
            expected: "an HTML element",
        })
}

/// Whether an event target is exactly `element`.
pub fn is_same_target(target: Option<&EventTarget>, element: &Element) -> bool {
    target.is_some_and(|t| {
        let element: &EventTarget = element.as_ref();
        t == element
    })
}

/// Register an event listener for the lifetime of the page.
///
/// # Note
/// The closure is intentionally leaked using `forget()`; the controllers
/// stay bound until the page unloads.
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl Fn(Event) + 'static,
) -> Result<(), BindError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| BindError::ListenerFailed(event))?;

    closure.forget();
    Ok(())
}
