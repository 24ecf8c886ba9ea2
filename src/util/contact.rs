//! Contact form validation.
//!
//! Presence is checked before shape, and the first failure wins. The email
//! check is deliberately permissive: `local@domain.tld` with no whitespace or
//! extra `@` in any part. Whitespace means the full Unicode set a browser's
//! `\s` covers (NBSP, the U+2000 spaces, line separators, BOM), not just ASCII.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::OnceLock;

use regex_lite::Regex;

/// `regex-lite` limits `\s` to ASCII, so the Unicode spaces are listed.
const EMAIL_PATTERN: &str = concat!(
    r"^[^\s\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
    r"@[^\s\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
    r"\.[^\s\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+$",
);

/// Why a submission was rejected. The display text is shown to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Shown after a submission passes validation.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

/// The three contact form fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

fn email_regex() -> Option<&'static Regex> {
    static VALUE: OnceLock<Option<Regex>> = OnceLock::new();
    VALUE
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(err) => {
                log::error!("email pattern failed to compile: {err}");
                None
            }
        })
        .as_ref()
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}
