//! Error types for page initialization.
//!
//! Initializers return [`DomError`] so the bootstrapper can log a broken
//! component and keep starting the rest. Form validation and config parsing
//! have their own error types next to the code that produces them.

/// Failure while wiring a component to the document.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// `window` is unavailable (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// A required element is missing from the page markup.
    #[error("required element missing: {0}")]
    MissingElement(String),
    /// A DOM call threw.
    #[error("javascript exception: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
