//! Static table of reveal animations applied at load.
//!
//! Each rule maps a selector to one animation token and, optionally, a
//! `stagger-N` token so siblings enter one after another. Elements in the
//! broader [`FALLBACK_SELECTORS`] set that no rule touched get [`FALLBACK_TOKEN`].
//! Every element carrying any token is then watched by the reveal observer.

#[cfg(test)]
#[path = "animation_plan_test.rs"]
mod animation_plan_test;

/// Observer fires once 10% of the element is on screen.
pub const OBSERVER_THRESHOLD: f64 = 0.1;
/// Bottom edge of the viewport pulled in by 50px.
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Stagger positions cycle through `stagger-1..=stagger-MAX_STAGGER`.
pub const MAX_STAGGER: usize = 5;
pub const FALLBACK_TOKEN: &str = "fade-in";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRule {
    pub selector: &'static str,
    pub token: &'static str,
    pub staggered: bool,
}

pub const RULES: &[AnimationRule] = &[
    AnimationRule { selector: ".hero-content", token: "slide-up", staggered: false },
    AnimationRule { selector: ".about-content", token: "slide-left", staggered: false },
    AnimationRule { selector: ".timeline-item", token: "slide-right", staggered: true },
    AnimationRule { selector: ".skill-category", token: "zoom-in", staggered: true },
    AnimationRule { selector: ".project-card", token: "fade-up", staggered: true },
    AnimationRule { selector: ".certificate-card", token: "fade-up", staggered: true },
    AnimationRule { selector: ".contact-content", token: "slide-up", staggered: false },
];

pub const FALLBACK_SELECTORS: &[&str] = &[
    ".section-title",
    ".about-content",
    ".timeline-item",
    ".skill-category",
    ".project-card",
    ".certificate-card",
    ".contact-content",
];

impl AnimationRule {
    /// Tokens for the element at `index` among this rule's matches.
    #[must_use]
    pub fn tokens_for(&self, index: usize) -> Vec<String> {
        let mut tokens = vec![self.token.to_owned()];
        if self.staggered {
            tokens.push(stagger_token(index));
        }
        tokens
    }
}

/// `stagger-N` for a zero-based match index, cycling through 1..=MAX_STAGGER.
#[must_use]
pub fn stagger_token(index: usize) -> String {
    format!("stagger-{}", index % MAX_STAGGER + 1)
}

/// Every distinct animation token the page may carry.
#[must_use]
pub fn all_tokens() -> Vec<&'static str> {
    let mut tokens = RULES.iter().map(|rule| rule.token).collect::<Vec<_>>();
    tokens.push(FALLBACK_TOKEN);
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}

/// Whether a class list already carries an animation token.
#[must_use]
pub fn has_animation_token<'a, I>(classes: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens = all_tokens();
    classes.into_iter().any(|class| tokens.iter().any(|token| *token == class))
}

/// Selector matching every element the reveal observer must watch.
#[must_use]
pub fn observed_selector() -> String {
    all_tokens()
        .iter()
        .map(|token| format!(".{token}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reveal state after an observer callback. Monotonic: once visible, always
/// visible.
#[must_use]
pub fn next_visibility(already_visible: bool, intersecting: bool) -> bool {
    already_visible || intersecting
}
