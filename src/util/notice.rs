//! Notification kinds, inline styling, and the single-slot lifecycle.
//!
//! ARCHITECTURE
//! ============
//! [`NoticeSlot`] is the one place that knows which notification is on
//! screen. Showing a new one hands back the previous handle so the caller can
//! remove it, which keeps at most one notification alive.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Delay before the reverse slide animation finishes and the node is removed.
pub const EXIT_ANIMATION_MS: u32 = 300;

/// Keyframes injected once into `<head>`.
pub const KEYFRAMES_CSS: &str = "@keyframes slideUp {\
 from { opacity: 0; transform: translateX(-50%) translateY(20px); }\
 to { opacity: 1; transform: translateX(-50%) translateY(0); } }";

/// Inline style applied to the dismiss button.
pub const CLOSE_BUTTON_STYLE: &str = "background: none; border: none; color: white; font-size: 1.25rem; \
cursor: pointer; padding: 0; line-height: 1;";

/// Animation override played before removal.
pub const EXIT_ANIMATION: &str = "slideUp 0.3s ease reverse";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "#3182ce",
            Self::Success => "#38a169",
            Self::Error => "#e53e3e",
        }
    }

    /// `notification notification-<kind>`.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Fixed bottom-center box colored by kind.
    #[must_use]
    pub fn inline_style(self) -> String {
        format!(
            "position: fixed; bottom: 30px; left: 50%; transform: translateX(-50%); \
             padding: 1rem 1.5rem; background-color: {}; color: white; border-radius: 8px; \
             box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2); display: flex; align-items: center; \
             gap: 1rem; z-index: 9999; animation: slideUp 0.3s ease;",
            self.color()
        )
    }
}

/// Holds the handle of the notification currently on screen.
///
/// The handle owns whatever must be torn down with the notification (its
/// node and the close listener). Both [`replace`](Self::replace) and
/// [`release`](Self::release) hand ownership back so the caller drops it.
#[derive(Debug)]
pub struct NoticeSlot<T> {
    current: Option<T>,
}

impl<T> Default for NoticeSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> NoticeSlot<T> {
    /// Install `next`, returning the notification it displaces.
    pub fn replace(&mut self, next: T) -> Option<T> {
        self.current.replace(next)
    }

    /// Take the handle out if it is still the one identified by `id`.
    ///
    /// Returns `None` when that notification was already displaced or
    /// released, which is how a late auto-dismiss timer learns there is
    /// nothing to do.
    pub fn release<Q: ?Sized>(&mut self, id: &Q) -> Option<T>
    where
        T: PartialEq<Q>,
    {
        if self.current.as_ref().is_some_and(|current| current == id) {
            self.current.take()
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}
