//! Site tuning parsed from an optional inline JSON block.
//!
//! The page may embed `<script type="application/json" id="site-config">`
//! with any subset of the fields below; missing fields keep their defaults.
//! The bootstrapper logs a malformed block and carries on with defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_NAVBAR_SCROLLED_PX: f64 = 50.0;
pub const DEFAULT_BACK_TO_TOP_PX: f64 = 500.0;
pub const DEFAULT_SECTION_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TYPING_TEXT: &str = "Full Stack Developer";
pub const DEFAULT_TYPING_START_DELAY_MS: u32 = 500;
pub const DEFAULT_TYPING_INTERVAL_MS: u32 = 100;
pub const DEFAULT_NOTIFICATION_DISMISS_MS: u32 = 5000;
pub const DEFAULT_HERO_FLOAT_DELAY_MS: u32 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The inline block is not valid JSON for [`SiteConfig`].
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A zero typing interval would reveal the whole string at once.
    #[error("typing_interval_ms must be greater than zero")]
    ZeroTypingInterval,
    /// `log_level` is not one of the `log` crate level names.
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Tunable thresholds, delays, and strings for the page behavior.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset past which the navbar gets the `scrolled` marker.
    pub navbar_scrolled_px: f64,
    /// Scroll offset past which the back-to-top button is shown.
    pub back_to_top_px: f64,
    /// Lead distance applied to section bands and the scroll reference point.
    pub section_offset_px: f64,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    pub typing_text: String,
    pub typing_start_delay_ms: u32,
    pub typing_interval_ms: u32,
    pub notification_dismiss_ms: u32,
    pub hero_float_delay_ms: u32,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_px: DEFAULT_NAVBAR_SCROLLED_PX,
            back_to_top_px: DEFAULT_BACK_TO_TOP_PX,
            section_offset_px: DEFAULT_SECTION_OFFSET_PX,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            typing_text: DEFAULT_TYPING_TEXT.to_owned(),
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            notification_dismiss_ms: DEFAULT_NOTIFICATION_DISMISS_MS,
            hero_float_delay_ms: DEFAULT_HERO_FLOAT_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config block. Absent fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configured log level.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_interval_ms == 0 {
            return Err(ConfigError::ZeroTypingInterval);
        }
        self.level()?;
        Ok(())
    }

    /// Read the inline `#site-config` block. No block means defaults.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Result<Self, ConfigError> {
        match document
            .get_element_by_id(crate::consts::SITE_CONFIG_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
