//! Mobile menu toggle and smooth in-page anchor scrolling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::consts::{ACTIVE_CLASS, ANCHOR_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID, NAVBAR_ID};
use crate::error::DomError;
use crate::util::dom::{by_id, html_by_id, listen, query_all, report, set_class, smooth_scroll_to, window};
use crate::util::scroll::anchor_scroll_top;

/// Wire the hamburger toggle and close the menu whenever a nav link is used.
pub fn init_menu(document: &Document) -> Result<(), DomError> {
    let toggle = by_id(document, NAV_TOGGLE_ID)?;
    let menu = by_id(document, NAV_MENU_ID)?;

    {
        let toggle_el = toggle.clone();
        let menu = menu.clone();
        listen(&toggle, "click", move |_| {
            report("menu toggle", toggle_menu(&toggle_el, &menu));
        })?;
    }

    for link in query_all(document, NAV_LINK_SELECTOR)? {
        let toggle = toggle.clone();
        let menu = menu.clone();
        listen(&link, "click", move |_| {
            report("menu close", close_menu(&toggle, &menu));
        })?;
    }
    Ok(())
}

fn toggle_menu(toggle: &Element, menu: &Element) -> Result<(), DomError> {
    toggle.class_list().toggle(ACTIVE_CLASS)?;
    menu.class_list().toggle(ACTIVE_CLASS)?;
    Ok(())
}

/// Clear the mobile menu's open state.
pub fn close_menu(toggle: &Element, menu: &Element) -> Result<(), DomError> {
    set_class(toggle, ACTIVE_CLASS, false)?;
    set_class(menu, ACTIVE_CLASS, false)
}

/// Close the mobile menu by id lookup, for callers without element handles.
pub fn close_menu_in(document: &Document) -> Result<(), DomError> {
    close_menu(&by_id(document, NAV_TOGGLE_ID)?, &by_id(document, NAV_MENU_ID)?)
}

/// Intercept `#fragment` links and scroll so the target clears the navbar.
pub fn init_anchor_scrolling(document: &Document) -> Result<(), DomError> {
    let navbar = html_by_id(document, NAVBAR_ID)?;
    for anchor in query_all(document, ANCHOR_SELECTOR)? {
        let document = document.clone();
        let navbar = navbar.clone();
        let source = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            report("anchor scroll", scroll_to_fragment(&document, &navbar, &source));
        })?;
    }
    Ok(())
}

fn scroll_to_fragment(document: &Document, navbar: &HtmlElement, anchor: &Element) -> Result<(), DomError> {
    let Some(href) = anchor.get_attribute("href") else {
        return Ok(());
    };
    // A bare "#" is not a valid selector and has no target.
    if href.len() < 2 {
        return Ok(());
    }
    let Some(target) = document.query_selector(&href)? else {
        return Ok(());
    };
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let top = anchor_scroll_top(f64::from(target.offset_top()), f64::from(navbar.offset_height()));
    smooth_scroll_to(&window()?, top);
    Ok(())
}
