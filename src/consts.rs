//! Element ids, selectors, and marker class names.
//!
//! These strings are the whole contract with the page markup and stylesheet.
//! Renaming one here without touching the HTML/CSS silently disables the
//! matching feature.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Element ids ─────────────────────────────────────────────────

pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const TYPING_TEXT_ID: &str = "typing-text";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CURRENT_YEAR_ID: &str = "current-year";
pub const SITE_CONFIG_ID: &str = "site-config";
pub const NOTIFICATION_STYLES_ID: &str = "notification-styles";

// ── Selectors ───────────────────────────────────────────────────

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const THEME_ICON_SELECTOR: &str = "i";
pub const SOCIAL_LINK_SELECTOR: &str = ".social-link";
pub const HERO_IMAGE_SELECTOR: &str = ".hero-image";
pub const MAIN_LANDMARK_SELECTOR: &str = "main, [role=\"main\"]";
pub const BUTTON_LIKE_SELECTOR: &str = "[role=\"button\"]";
pub const NOTIFICATION_SELECTOR: &str = ".notification";
pub const NOTIFICATION_CLOSE_CLASS: &str = "notification-close";

// ── Markers ─────────────────────────────────────────────────────

pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const PULSE_CLASS: &str = "pulse";
pub const FLOAT_CLASS: &str = "float";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const SUN_ICON_CLASS: &str = "fa-sun";
pub const MOON_ICON_CLASS: &str = "fa-moon";

// ── Contact form fields ─────────────────────────────────────────

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

/// Builds the selector for the navigation link pointing at `#section_id`.
#[must_use]
pub fn nav_link_for(section_id: &str) -> String {
    format!("{NAV_LINK_SELECTOR}[href=\"#{section_id}\"]")
}
