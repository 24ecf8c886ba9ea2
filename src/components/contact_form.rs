//! Contact form: local validation, notification, reset. Nothing is sent.

use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlFormElement};

use crate::consts::{CONTACT_FORM_ID, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};
use crate::error::DomError;
use crate::util::contact::{ContactSubmission, SUCCESS_MESSAGE};
use crate::util::dom::{listen, report};
use crate::util::notice::NotificationKind;

use super::notification::NotificationService;

/// Wire the form if the page has one. Absence is not an error.
pub fn init(document: &Document, notifications: &NotificationService) -> Result<(), DomError> {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::debug!("no contact form on this page");
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| DomError::MissingElement(format!("#{CONTACT_FORM_ID} (not a form)")))?;

    let notifications = notifications.clone();
    let target = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        report("contact form", on_submit(&target, &notifications));
    })
}

fn on_submit(form: &HtmlFormElement, notifications: &NotificationService) -> Result<(), DomError> {
    let data = FormData::new_with_form(form)?;
    let submission = ContactSubmission {
        name: field(&data, FIELD_NAME),
        email: field(&data, FIELD_EMAIL),
        message: field(&data, FIELD_MESSAGE),
    };

    if let Err(err) = submission.validate() {
        log::debug!("contact form rejected: {err:?}");
        notifications.notify(&err.to_string(), NotificationKind::Error);
        return Ok(());
    }

    log::info!(
        "contact form submitted: name={} email={} message_len={}",
        submission.name,
        submission.email,
        submission.message.chars().count()
    );
    notifications.notify(SUCCESS_MESSAGE, NotificationKind::Success);
    form.reset();
    Ok(())
}

/// Text value of a form field; missing or non-text fields read as empty.
fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}
