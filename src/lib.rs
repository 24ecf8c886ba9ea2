//! # portfolio
//!
//! WASM behavior layer for a static personal-portfolio page.
//!
//! The HTML and CSS are authored by hand and shipped as static files; this
//! crate attaches to the parsed document and drives everything interactive:
//! navbar chrome, active-section highlighting, reveal-on-scroll animations,
//! the hero typing effect, the light/dark theme toggle, keyboard shortcuts,
//! and the contact form with its transient notifications.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Bootstrapper that wires every component on page load |
//! | `components` | DOM controllers, one per page feature (`hydrate` only) |
//! | [`util`] | Pure helpers (band math, validation, typing cursor, theme state) |
//! | [`config`] | Tunable thresholds and delays, overridable from inline JSON |
//! | [`consts`] | Element ids, selectors, and marker class names |
//! | [`error`] | Error types shared by the initializers |
//!
//! Browser-only code is behind the `hydrate` feature. Without it the pure
//! helpers compile and test natively.

pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod util;

/// WASM entry point, invoked by the generated JS glue once the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::boot();
}
