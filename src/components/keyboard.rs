//! Global keyboard shortcuts.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::consts::{BUTTON_LIKE_SELECTOR, MAIN_LANDMARK_SELECTOR};
use crate::error::DomError;
use crate::util::dom::{listen, report};
use crate::util::keys::{KeyCommand, KeyPress};

use super::navigation::close_menu_in;

pub fn init(document: &Document) -> Result<(), DomError> {
    let doc = document.clone();
    listen(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        report("keyboard", on_keydown(&doc, event));
    })
}

fn on_keydown(document: &Document, event: &KeyboardEvent) -> Result<(), DomError> {
    let target = event.target().and_then(|t| t.dyn_ref::<Element>().cloned());
    let on_button_like = match &target {
        Some(el) => el.matches(BUTTON_LIKE_SELECTOR)?,
        None => false,
    };
    let key = event.key();
    let press = KeyPress { key: &key, alt: event.alt_key(), on_button_like };
    let Some(command) = press.command() else {
        return Ok(());
    };
    if command.prevents_default() {
        event.prevent_default();
    }

    match command {
        KeyCommand::CloseMenu => close_menu_in(document),
        KeyCommand::SkipToMain => skip_to_main(document),
        KeyCommand::Activate => {
            if let Some(el) = target.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
                el.click();
            }
            Ok(())
        }
    }
}

fn skip_to_main(document: &Document) -> Result<(), DomError> {
    let Some(main) = document.query_selector(MAIN_LANDMARK_SELECTOR)? else {
        log::debug!("skip-to-main: no main landmark");
        return Ok(());
    };
    let Some(main) = main.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    if !main.has_attribute("tabindex") {
        main.set_tab_index(-1);
    }
    main.focus()?;

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    main.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
