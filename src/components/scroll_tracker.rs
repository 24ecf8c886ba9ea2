//! Scroll-driven navbar chrome, back-to-top button, and active nav link.
//!
//! DESIGN
//! ======
//! A single `scroll` listener runs the three updates in a fixed order. Section
//! geometry is read fresh on every tick because images and fonts may still be
//! shifting layout after load.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::consts::{
    ACTIVE_CLASS, BACK_TO_TOP_ID, NAV_LINK_SELECTOR, NAVBAR_ID, SCROLLED_CLASS, SECTION_SELECTOR, VISIBLE_CLASS,
    nav_link_for,
};
use crate::error::DomError;
use crate::util::dom::{by_id, listen, query_all, report, scroll_y, set_class, smooth_scroll_to, window};
use crate::util::scroll::ScrollThresholds;

struct ScrollTracker {
    window: Window,
    document: Document,
    navbar: Element,
    back_to_top: Element,
    thresholds: ScrollThresholds,
}

pub fn init(document: &Document, config: &SiteConfig) -> Result<(), DomError> {
    let window = window()?;
    let tracker = ScrollTracker {
        window: window.clone(),
        document: document.clone(),
        navbar: by_id(document, NAVBAR_ID)?,
        back_to_top: by_id(document, BACK_TO_TOP_ID)?,
        thresholds: ScrollThresholds::from(config),
    };

    {
        let window = window.clone();
        listen(&tracker.back_to_top, "click", move |_| smooth_scroll_to(&window, 0.0))?;
    }

    // Sync once so a reload mid-page starts in the right state.
    report("scroll tracker", tracker.on_scroll());
    listen(&window, "scroll", move |_| report("scroll tracker", tracker.on_scroll()))
}

impl ScrollTracker {
    fn on_scroll(&self) -> Result<(), DomError> {
        let offset = scroll_y(&self.window);
        set_class(&self.navbar, SCROLLED_CLASS, self.thresholds.navbar_scrolled(offset))?;
        set_class(&self.back_to_top, VISIBLE_CLASS, self.thresholds.back_to_top_visible(offset))?;
        self.highlight_active_link(offset)
    }

    fn highlight_active_link(&self, offset: f64) -> Result<(), DomError> {
        let sections = query_all(&self.document, SECTION_SELECTOR)?
            .into_iter()
            .flat_map(|el| el.dyn_into::<HtmlElement>())
            .collect::<Vec<_>>();
        let geometry = sections
            .iter()
            .map(|s| (f64::from(s.offset_top()), f64::from(s.offset_height())));
        let active = self.thresholds.active_section(offset, geometry);

        for link in query_all(&self.document, NAV_LINK_SELECTOR)? {
            set_class(&link, ACTIVE_CLASS, false)?;
        }
        let Some(section) = active.and_then(|index| sections.get(index)) else {
            return Ok(());
        };
        if let Some(link) = self.document.query_selector(&nav_link_for(&section.id()))? {
            set_class(&link, ACTIVE_CLASS, true)?;
        }
        Ok(())
    }
}
