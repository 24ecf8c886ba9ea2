use std::rc::Rc;

use super::*;

// =============================================================
// NotificationKind
// =============================================================

#[test]
fn default_kind_is_info() {
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

#[test]
fn colors_by_kind() {
    assert_eq!(NotificationKind::Success.color(), "#38a169");
    assert_eq!(NotificationKind::Error.color(), "#e53e3e");
    assert_eq!(NotificationKind::Info.color(), "#3182ce");
}

#[test]
fn class_name_includes_kind() {
    assert_eq!(NotificationKind::Error.class_name(), "notification notification-error");
}

#[test]
fn inline_style_is_fixed_bottom_center() {
    let style = NotificationKind::Success.inline_style();
    assert!(style.contains("position: fixed"));
    assert!(style.contains("bottom: 30px"));
    assert!(style.contains("left: 50%"));
    assert!(style.contains("background-color: #38a169"));
}

#[test]
fn exit_animation_reverses_entry_within_removal_delay() {
    assert!(KEYFRAMES_CSS.contains("@keyframes slideUp"));
    assert!(EXIT_ANIMATION.starts_with("slideUp "));
    assert!(EXIT_ANIMATION.ends_with(" reverse"));
    assert!(EXIT_ANIMATION.contains(&format!("{}s", f64::from(EXIT_ANIMATION_MS) / 1000.0)));
}

// =============================================================
// NoticeSlot
// =============================================================

#[test]
fn second_notice_displaces_first() {
    let mut slot = NoticeSlot::default();
    assert_eq!(slot.replace("first".to_owned()), None);
    assert_eq!(slot.replace("second".to_owned()), Some("first".to_owned()));
    assert_eq!(slot.current().map(String::as_str), Some("second"));
}

#[test]
fn release_takes_matching_handle() {
    let mut slot = NoticeSlot::default();
    slot.replace(1);
    assert_eq!(slot.release(&1), Some(1));
    assert_eq!(slot.current(), None);
}

#[test]
fn release_is_noop_after_displacement() {
    let mut slot = NoticeSlot::default();
    slot.replace(1);
    slot.replace(2);
    assert_eq!(slot.release(&1), None);
    assert_eq!(slot.current(), Some(&2));
}

#[test]
fn double_release_is_harmless() {
    let mut slot = NoticeSlot::default();
    slot.replace(7);
    assert_eq!(slot.release(&7), Some(7));
    assert_eq!(slot.release(&7), None);
}

/// Stands in for a shown notification: an id plus a resource that must be
/// freed when the notification goes away.
struct Shown {
    id: u32,
    listener: Rc<()>,
}

impl PartialEq<u32> for Shown {
    fn eq(&self, id: &u32) -> bool {
        self.id == *id
    }
}

#[test]
fn released_handle_frees_its_resources() {
    let listener = Rc::new(());
    let mut slot = NoticeSlot::default();
    slot.replace(Shown { id: 1, listener: Rc::clone(&listener) });
    assert_eq!(Rc::strong_count(&listener), 2);

    let released = slot.release(&1);
    assert!(released.is_some_and(|shown| shown.id == 1));
    assert_eq!(Rc::strong_count(&listener), 1);
}

#[test]
fn displaced_handle_frees_its_resources() {
    let first = Rc::new(());
    let mut slot = NoticeSlot::default();
    slot.replace(Shown { id: 1, listener: Rc::clone(&first) });
    drop(slot.replace(Shown { id: 2, listener: Rc::new(()) }));
    assert_eq!(Rc::strong_count(&first), 1);
    assert!(slot.release(&1).is_none());
    assert!(slot.release(&2).is_some_and(|shown| Rc::strong_count(&shown.listener) == 1));
}

#[test]
fn many_notifications_leave_nothing_behind() {
    let listener = Rc::new(());
    let mut slot = NoticeSlot::default();
    for id in 0..50 {
        drop(slot.replace(Shown { id, listener: Rc::clone(&listener) }));
    }
    drop(slot.release(&49));
    assert_eq!(Rc::strong_count(&listener), 1);
}
