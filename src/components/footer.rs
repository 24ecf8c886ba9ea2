//! Footer copyright year.

use web_sys::Document;

use crate::consts::CURRENT_YEAR_ID;

/// Write the current year into the year element, if the page has one.
pub fn set_current_year(document: &Document) {
    let Some(element) = document.get_element_by_id(CURRENT_YEAR_ID) else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
}
