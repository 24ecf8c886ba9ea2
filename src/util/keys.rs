//! Global keyboard shortcut classification.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// What a keydown should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Escape: close the mobile menu.
    CloseMenu,
    /// Alt+M: focus and reveal the main landmark.
    SkipToMain,
    /// Enter or Space on a button-like element: click it.
    Activate,
}

/// Key state relevant to shortcuts, decoupled from `web_sys::KeyboardEvent`.
#[derive(Clone, Copy, Debug)]
pub struct KeyPress<'a> {
    /// `KeyboardEvent.key`.
    pub key: &'a str,
    pub alt: bool,
    /// Whether the event target carries a button-like role.
    pub on_button_like: bool,
}

impl KeyPress<'_> {
    #[must_use]
    pub fn command(&self) -> Option<KeyCommand> {
        if self.key == "Escape" {
            return Some(KeyCommand::CloseMenu);
        }
        if self.alt && self.key.eq_ignore_ascii_case("m") {
            return Some(KeyCommand::SkipToMain);
        }
        if self.on_button_like && matches!(self.key, "Enter" | " " | "Spacebar") {
            return Some(KeyCommand::Activate);
        }
        None
    }
}

impl KeyCommand {
    /// Whether the browser's default handling must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::CloseMenu)
    }
}
