//! Thin `web-sys` helpers shared by the components.
//!
//! Lookups return [`DomError`] so initializers can `?` through missing
//! markup. Listeners registered here live for the page lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Required element by id.
pub fn by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{id}")))
}

/// Required element by id, as an `HtmlElement`.
pub fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement, DomError> {
    by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::MissingElement(format!("#{id} (not an HTML element)")))
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect())
}

/// Add or remove a marker class.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    let classes = element.class_list();
    if on {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

/// Attach a listener for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Log a failed DOM mutation inside an event callback.
pub fn report(context: &str, result: Result<(), DomError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::debug!("scrollY unavailable: {err:?}");
            0.0
        }
    }
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
