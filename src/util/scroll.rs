//! Scroll-position math for navbar chrome, back-to-top, and active sections.
//!
//! DESIGN
//! ======
//! Each section owns a vertical band `(top - lead, top - lead + height]`.
//! The reference point is `offset + lead`. Matching walks every section in
//! document order without breaking early, so when bands overlap the last
//! containing section wins.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::SiteConfig;

/// Vertical scroll-offset range attributed to one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Exclusive lower bound.
    pub start: f64,
    /// Inclusive upper bound.
    pub end: f64,
}

impl Band {
    /// Band for a section at `top` with rendered `height`.
    #[must_use]
    pub fn for_section(top: f64, height: f64, lead: f64) -> Self {
        let start = top - lead;
        Self { start, end: start + height }
    }

    #[must_use]
    pub fn contains(self, point: f64) -> bool {
        point > self.start && point <= self.end
    }
}

/// Thresholds derived from [`SiteConfig`] for one scroll tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub navbar_scrolled_px: f64,
    pub back_to_top_px: f64,
    pub section_offset_px: f64,
}

impl From<&SiteConfig> for ScrollThresholds {
    fn from(config: &SiteConfig) -> Self {
        Self {
            navbar_scrolled_px: config.navbar_scrolled_px,
            back_to_top_px: config.back_to_top_px,
            section_offset_px: config.section_offset_px,
        }
    }
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

impl ScrollThresholds {
    #[must_use]
    pub fn navbar_scrolled(&self, offset: f64) -> bool {
        offset > self.navbar_scrolled_px
    }

    #[must_use]
    pub fn back_to_top_visible(&self, offset: f64) -> bool {
        offset > self.back_to_top_px
    }

    /// Index of the section whose link should be active, if any.
    ///
    /// `sections` yields `(top, height)` in document order.
    #[must_use]
    pub fn active_section<I>(&self, offset: f64, sections: I) -> Option<usize>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let point = offset + self.section_offset_px;
        let mut active = None;
        for (index, (top, height)) in sections.into_iter().enumerate() {
            if Band::for_section(top, height, self.section_offset_px).contains(point) {
                active = Some(index);
            }
        }
        active
    }
}

/// Window scroll target for an in-page anchor, keeping the section clear of
/// the fixed navbar.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height
}
