//! Hero typing effect driver.

use std::time::Duration;

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::consts::TYPING_TEXT_ID;
use crate::error::DomError;
use crate::util::dom::by_id;
use crate::util::typing::{Typewriter, TypingStep};

/// Start typing `config.typing_text` into the typing element after the
/// configured delay. Runs once; there is no way to stop it.
pub fn init(document: &Document, config: &SiteConfig) -> Result<(), DomError> {
    let target = by_id(document, TYPING_TEXT_ID)?;
    target.set_text_content(Some(""));

    let typewriter = Typewriter::new(&config.typing_text);
    let start = Duration::from_millis(u64::from(config.typing_start_delay_ms));
    let interval = Duration::from_millis(u64::from(config.typing_interval_ms));
    wasm_bindgen_futures::spawn_local(run(target, typewriter, start, interval));
    Ok(())
}

async fn run(target: Element, mut typewriter: Typewriter, start: Duration, interval: Duration) {
    gloo_timers::future::sleep(start).await;
    while let TypingStep::Revealed(visible) = typewriter.tick() {
        target.set_text_content(Some(&visible));
        gloo_timers::future::sleep(interval).await;
    }
    log::debug!("typing finished");
}
