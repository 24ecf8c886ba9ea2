//! Theme toggle button: applies the stored theme and flips it on click.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::consts::{THEME_ATTRIBUTE, THEME_ICON_SELECTOR, THEME_TOGGLE_ID};
use crate::error::DomError;
use crate::util::dom::{by_id, listen, report};
use crate::util::preference::open_default_store;
use crate::util::theme::{Theme, ThemeController};

pub fn init(document: &Document, config: &SiteConfig) -> Result<(), DomError> {
    let toggle = by_id(document, THEME_TOGGLE_ID)?;
    let icon = toggle.query_selector(THEME_ICON_SELECTOR)?;
    let root = document
        .document_element()
        .ok_or_else(|| DomError::MissingElement("html".to_owned()))?;

    let controller = ThemeController::init(open_default_store(), &config.theme_storage_key);
    apply(&root, icon.as_ref(), controller.current())?;
    log::info!("theme initialized: {}", controller.current().as_str());

    let controller = Rc::new(RefCell::new(controller));
    listen(&toggle, "click", move |_| {
        let next = controller.borrow_mut().toggle();
        log::debug!("theme toggled: {}", next.as_str());
        report("theme toggle", apply(&root, icon.as_ref(), next));
    })
}

/// Set the root attribute and swap the icon for `theme`.
fn apply(root: &Element, icon: Option<&Element>, theme: Theme) -> Result<(), DomError> {
    match theme {
        Theme::Dark => root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?,
        Theme::Light => root.remove_attribute(THEME_ATTRIBUTE)?,
    }
    if let Some(icon) = icon {
        let classes = icon.class_list();
        classes.remove_1(theme.stale_icon_class())?;
        classes.add_1(theme.icon_class())?;
    }
    Ok(())
}
