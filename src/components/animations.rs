//! Reveal-on-scroll markers, social icon pulse, and the hero float.
//!
//! ARCHITECTURE
//! ============
//! Tokens from `util::animation_plan` are applied once at load. A single
//! `IntersectionObserver` then adds `visible` to each marked element the
//! first time it intersects. Nothing ever removes `visible`, so the observer
//! keeps watching without unobserving.

use std::time::Duration;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::consts::{FLOAT_CLASS, HERO_IMAGE_SELECTOR, PULSE_CLASS, SOCIAL_LINK_SELECTOR, VISIBLE_CLASS};
use crate::error::DomError;
use crate::util::animation_plan::{
    FALLBACK_SELECTORS, FALLBACK_TOKEN, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD, RULES, has_animation_token,
    next_visibility, observed_selector,
};
use crate::util::dom::{listen, query_all, report, set_class};

pub fn init(document: &Document, config: &SiteConfig) -> Result<(), DomError> {
    apply_tokens(document)?;
    let observed = observe_reveals(document)?;
    init_social_pulse(document)?;
    schedule_hero_float(document, config.hero_float_delay_ms);
    log::debug!("animations initialized: {observed} elements observed");
    Ok(())
}

fn apply_tokens(document: &Document) -> Result<(), DomError> {
    for rule in RULES {
        for (index, element) in query_all(document, rule.selector)?.iter().enumerate() {
            for token in rule.tokens_for(index) {
                element.class_list().add_1(&token)?;
            }
        }
    }

    for selector in FALLBACK_SELECTORS {
        for element in query_all(document, selector)? {
            if !has_animation_token(class_names(&element).iter().map(String::as_str)) {
                element.class_list().add_1(FALLBACK_TOKEN)?;
            }
        }
    }
    Ok(())
}

fn class_names(element: &Element) -> Vec<String> {
    element.class_name().split_whitespace().map(str::to_owned).collect()
}

fn observe_reveals(document: &Document) -> Result<usize, DomError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(on_intersect);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&OBSERVER_THRESHOLD.into());
    options.set_root_margin(OBSERVER_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let elements = query_all(document, &observed_selector())?;
    for element in &elements {
        observer.observe(element);
    }
    Ok(elements.len())
}

fn on_intersect(entries: Array, _observer: IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let was_visible = target.class_list().contains(VISIBLE_CLASS);
        if !was_visible && next_visibility(was_visible, entry.is_intersecting()) {
            report("reveal", set_class(&target, VISIBLE_CLASS, true));
        }
    }
}

fn init_social_pulse(document: &Document) -> Result<(), DomError> {
    for link in query_all(document, SOCIAL_LINK_SELECTOR)? {
        let target = link.clone();
        listen(&link, "mouseenter", move |_| report("pulse", set_class(&target, PULSE_CLASS, true)))?;
        let target = link.clone();
        listen(&link, "mouseleave", move |_| report("pulse", set_class(&target, PULSE_CLASS, false)))?;
    }
    Ok(())
}

fn schedule_hero_float(document: &Document, delay_ms: u32) {
    let document = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(delay_ms))).await;
        match document.query_selector(HERO_IMAGE_SELECTOR) {
            Ok(Some(hero)) => report("hero float", set_class(&hero, FLOAT_CLASS, true)),
            Ok(None) => log::debug!("no hero image to float"),
            Err(err) => log::warn!("hero lookup failed: {err:?}"),
        }
    });
}
