use super::*;

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_minimal_address() {
    assert!(is_valid_email("a@b.c"));
}

#[test]
fn accepts_common_addresses() {
    assert!(is_valid_email("jane.doe@example.com"));
    assert!(is_valid_email("dev+portfolio@mail.example.co.uk"));
}

#[test]
fn rejects_missing_tld_dot() {
    assert!(!is_valid_email("a@b"));
}

#[test]
fn rejects_missing_at() {
    assert!(!is_valid_email("a.b@c"));
    assert!(!is_valid_email("a.b.c"));
}

#[test]
fn rejects_whitespace_and_double_at() {
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@b@c.d"));
    assert!(!is_valid_email(" a@b.c"));
}

#[test]
fn pattern_compiles() {
    assert!(Regex::new(EMAIL_PATTERN).is_ok());
    assert!(email_regex().is_some());
}

#[test]
fn rejects_unicode_whitespace_in_any_part() {
    assert!(!is_valid_email("a\u{a0}b@c.d"));
    assert!(!is_valid_email("a@b\u{2003}x.c"));
    assert!(!is_valid_email("a@b.c\u{feff}"));
    assert!(!is_valid_email("a\u{2028}@b.c"));
    assert!(!is_valid_email("a@b.c\u{3000}"));
}

#[test]
fn accepts_non_ascii_letters() {
    assert!(is_valid_email("jos\u{e9}@caf\u{e9}.fr"));
}

#[test]
fn rejects_empty_parts() {
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email(""));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn valid_submission_passes() {
    assert_eq!(submission("Ada", "ada@example.com", "Hello").validate(), Ok(()));
}

#[test]
fn each_empty_field_is_missing() {
    assert_eq!(submission("", "ada@example.com", "Hi").validate(), Err(ValidationError::MissingFields));
    assert_eq!(submission("Ada", "", "Hi").validate(), Err(ValidationError::MissingFields));
    assert_eq!(submission("Ada", "ada@example.com", "").validate(), Err(ValidationError::MissingFields));
}

#[test]
fn presence_is_checked_before_email_shape() {
    assert_eq!(submission("", "not-an-email", "Hi").validate(), Err(ValidationError::MissingFields));
}

#[test]
fn bad_email_is_reported_after_presence() {
    assert_eq!(submission("Ada", "a@b", "Hi").validate(), Err(ValidationError::InvalidEmail));
}

#[test]
fn error_text_is_user_facing() {
    assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in all fields.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address.");
}
