use super::*;

#[test]
fn nav_link_selector_targets_fragment() {
    assert_eq!(nav_link_for("about"), ".nav-link[href=\"#about\"]");
}

#[test]
fn marker_classes_are_distinct() {
    let markers = [SCROLLED_CLASS, ACTIVE_CLASS, VISIBLE_CLASS, PULSE_CLASS, FLOAT_CLASS];
    for (i, a) in markers.iter().enumerate() {
        for b in &markers[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
