use super::*;

fn press(key: &str, alt: bool, on_button_like: bool) -> Option<KeyCommand> {
    KeyPress { key, alt, on_button_like }.command()
}

#[test]
fn escape_closes_menu_anywhere() {
    assert_eq!(press("Escape", false, false), Some(KeyCommand::CloseMenu));
    assert_eq!(press("Escape", true, true), Some(KeyCommand::CloseMenu));
}

#[test]
fn alt_m_skips_to_main_in_either_case() {
    assert_eq!(press("m", true, false), Some(KeyCommand::SkipToMain));
    assert_eq!(press("M", true, false), Some(KeyCommand::SkipToMain));
}

#[test]
fn plain_m_does_nothing() {
    assert_eq!(press("m", false, false), None);
}

#[test]
fn enter_and_space_activate_button_like() {
    assert_eq!(press("Enter", false, true), Some(KeyCommand::Activate));
    assert_eq!(press(" ", false, true), Some(KeyCommand::Activate));
    assert_eq!(press("Spacebar", false, true), Some(KeyCommand::Activate));
}

#[test]
fn enter_elsewhere_is_ignored() {
    assert_eq!(press("Enter", false, false), None);
    assert_eq!(press(" ", false, false), None);
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(press("a", false, true), None);
    assert_eq!(press("Tab", false, false), None);
}

#[test]
fn only_escape_keeps_default_handling() {
    assert!(!KeyCommand::CloseMenu.prevents_default());
    assert!(KeyCommand::SkipToMain.prevents_default());
    assert!(KeyCommand::Activate.prevents_default());
}
