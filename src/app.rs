//! Bootstrapper: installs logging, loads config, and starts every component.
//!
//! Components are independent. A component whose required markup is missing
//! logs an error and the rest still start.

#[cfg(feature = "hydrate")]
use crate::components::{
    animations, contact_form, footer, keyboard, navigation, notification::NotificationService, scroll_tracker,
    theme_toggle, typing,
};
#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::error::DomError;
#[cfg(feature = "hydrate")]
use crate::util::dom::{document, listen};

/// Page entry point. Runs now if the DOM is parsed, else on `DOMContentLoaded`.
pub fn boot() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let document = match document() {
            Ok(document) => document,
            Err(err) => {
                web_sys::console::error_1(&format!("portfolio: {err}").into());
                return;
            }
        };
        let loaded = SiteConfig::load(&document);
        let config = loaded.as_ref().map_or_else(|_| SiteConfig::default(), Clone::clone);
        init_logging(&config);
        if let Err(err) = loaded {
            log::warn!("ignoring inline site config: {err}");
        }

        if document.ready_state() == "loading" {
            let doc = document.clone();
            let registered = listen(&document, "DOMContentLoaded", move |_| start_components(&doc, &config));
            if let Err(err) = registered {
                log::error!("cannot wait for DOMContentLoaded: {err}");
            }
        } else {
            start_components(&document, &config);
        }
    }
}

#[cfg(feature = "hydrate")]
fn init_logging(config: &SiteConfig) {
    let level = config.level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

#[cfg(feature = "hydrate")]
fn start_components(document: &web_sys::Document, config: &SiteConfig) {
    let notifications = NotificationService::new(document.clone(), config.notification_dismiss_ms);

    started("theme", theme_toggle::init(document, config));
    started("navigation menu", navigation::init_menu(document));
    started("anchor scrolling", navigation::init_anchor_scrolling(document));
    started("scroll tracker", scroll_tracker::init(document, config));
    started("animations", animations::init(document, config));
    started("typing", typing::init(document, config));
    started("keyboard", keyboard::init(document));
    started("contact form", contact_form::init(document, &notifications));
    footer::set_current_year(document);

    log::info!("portfolio ready");
}

#[cfg(feature = "hydrate")]
fn started(component: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => log::debug!("{component} started"),
        Err(err) => log::error!("{component} failed to start: {err}"),
    }
}
