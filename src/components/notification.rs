//! Transient bottom-center notifications.
//!
//! ARCHITECTURE
//! ============
//! One [`NotificationService`] is created at boot and cloned into whatever
//! reports to the visitor. Clones share the same [`NoticeSlot`], so a new
//! message always replaces the one on screen.
//!
//! Each shown notification is a [`ShownNotice`]: the node plus the close
//! button's `Closure`. The slot owns it, so displacing or removing a
//! notification drops the listener along with the node.
//!
//! Timers are never cancelled. A late auto-dismiss checks that its node is
//! still connected before animating, and removal of an already-removed node
//! is a no-op.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::consts::{NOTIFICATION_CLOSE_CLASS, NOTIFICATION_SELECTOR, NOTIFICATION_STYLES_ID};
use crate::error::DomError;
use crate::util::dom::{query_all, report};
use crate::util::notice::{
    CLOSE_BUTTON_STYLE, EXIT_ANIMATION, EXIT_ANIMATION_MS, KEYFRAMES_CSS, NoticeSlot, NotificationKind,
};

/// A notification on screen and the listener wired to its close button.
struct ShownNotice {
    element: Element,
    _on_close: Closure<dyn FnMut(Event)>,
}

impl PartialEq<Element> for ShownNotice {
    fn eq(&self, element: &Element) -> bool {
        self.element == *element
    }
}

#[derive(Clone)]
pub struct NotificationService {
    document: Document,
    dismiss_ms: u32,
    slot: Rc<RefCell<NoticeSlot<ShownNotice>>>,
}

impl NotificationService {
    pub fn new(document: Document, dismiss_ms: u32) -> Self {
        Self { document, dismiss_ms, slot: Rc::new(RefCell::new(NoticeSlot::default())) }
    }

    /// Show `message`, replacing any notification already on screen.
    pub fn notify(&self, message: &str, kind: NotificationKind) {
        report("notification", self.show(message, kind));
    }

    fn show(&self, message: &str, kind: NotificationKind) -> Result<(), DomError> {
        for stale in query_all(&self.document, NOTIFICATION_SELECTOR)? {
            stale.remove();
        }
        self.ensure_keyframes()?;

        let notification = self.document.create_element("div")?;
        notification.set_class_name(&kind.class_name());
        notification.set_attribute("style", &kind.inline_style())?;
        notification.set_attribute("role", "status")?;

        let text = self.document.create_element("span")?;
        text.set_text_content(Some(message));
        notification.append_child(&text)?;

        let close = self.document.create_element("button")?;
        close.set_class_name(NOTIFICATION_CLOSE_CLASS);
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Dismiss notification")?;
        close.set_attribute("style", CLOSE_BUTTON_STYLE)?;
        close.set_text_content(Some("\u{d7}"));
        notification.append_child(&close)?;

        let service = self.clone();
        let handle = notification.clone();
        let on_close = Closure::<dyn FnMut(Event)>::new(move |_| service.remove(&handle));
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;

        // Last fallible step: a failure here leaves nothing on screen.
        let body = self.document.body().ok_or_else(|| DomError::MissingElement("body".to_owned()))?;
        body.append_child(&notification)?;

        let shown = ShownNotice { element: notification.clone(), _on_close: on_close };
        let displaced = self.slot.borrow_mut().replace(shown);
        if let Some(previous) = displaced {
            previous.element.remove();
        }

        let service = self.clone();
        let delay = Duration::from_millis(u64::from(self.dismiss_ms));
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            service.fade_out(notification).await;
        });

        log::debug!("notification shown: kind={}", kind.as_str());
        Ok(())
    }

    fn ensure_keyframes(&self) -> Result<(), DomError> {
        if self.document.get_element_by_id(NOTIFICATION_STYLES_ID).is_some() {
            return Ok(());
        }
        let style = self.document.create_element("style")?;
        style.set_id(NOTIFICATION_STYLES_ID);
        style.set_text_content(Some(KEYFRAMES_CSS));
        let head = self.document.head().ok_or_else(|| DomError::MissingElement("head".to_owned()))?;
        head.append_child(&style)?;
        Ok(())
    }

    async fn fade_out(&self, notification: Element) {
        if !notification.is_connected() {
            return;
        }
        if let Some(html) = notification.dyn_ref::<HtmlElement>() {
            if let Err(err) = html.style().set_property("animation", EXIT_ANIMATION) {
                log::debug!("notification exit animation skipped: {err:?}");
            }
        }
        gloo_timers::future::sleep(Duration::from_millis(u64::from(EXIT_ANIMATION_MS))).await;
        self.remove(&notification);
    }

    fn remove(&self, notification: &Element) {
        let released = self.slot.borrow_mut().release(notification);
        notification.remove();
        drop(released);
    }
}
