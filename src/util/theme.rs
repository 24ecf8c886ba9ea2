//! Light/dark theme state and its persisted preference.
//!
//! The stored value is the literal `"light"` or `"dark"`. Anything else,
//! including no value, reads as light. The DOM side (root attribute and icon)
//! lives in `components::theme_toggle`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{MOON_ICON_CLASS, SUN_ICON_CLASS};
use crate::util::preference::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Unrecognized input falls back to light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class shown on the toggle: the sun offers a way back to light.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON_CLASS,
            Self::Dark => SUN_ICON_CLASS,
        }
    }

    /// Icon class to remove when this theme is applied.
    #[must_use]
    pub fn stale_icon_class(self) -> &'static str {
        self.toggled().icon_class()
    }
}

/// Owns the current theme and keeps the store in sync with it.
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    key: String,
    current: Theme,
}

impl ThemeController {
    /// Read the persisted preference once.
    pub fn init(store: Box<dyn PreferenceStore>, key: &str) -> Self {
        let current = Theme::from_stored(store.get(key).as_deref());
        Self { store, key: key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        self.current
    }

    #[cfg(test)]
    pub fn stored(&self) -> Option<String> {
        self.store.get(&self.key)
    }
}
