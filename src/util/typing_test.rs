use super::*;

#[test]
fn starts_empty() {
    let tw = Typewriter::new("abc");
    assert_eq!(tw.visible(), "");
    assert!(!tw.is_finished());
}

#[test]
fn each_tick_reveals_one_character() {
    let mut tw = Typewriter::new("abc");
    assert_eq!(tw.tick(), TypingStep::Revealed("a".to_owned()));
    assert_eq!(tw.tick(), TypingStep::Revealed("ab".to_owned()));
    assert_eq!(tw.tick(), TypingStep::Revealed("abc".to_owned()));
    assert!(tw.is_finished());
    assert_eq!(tw.tick(), TypingStep::Finished);
}

#[test]
fn full_stack_developer_completes_after_21_ticks() {
    let text = "Full Stack Developer";
    let mut tw = Typewriter::new(text);
    assert_eq!(tw.total_ticks(), 21);

    let mut revealed = Vec::new();
    for _ in 0..21 {
        revealed.push(tw.tick());
    }
    assert_eq!(revealed[19], TypingStep::Revealed(text.to_owned()));
    assert_eq!(revealed[20], TypingStep::Finished);
    assert_eq!(tw.visible(), text);
}

#[test]
fn no_mutation_after_finish() {
    let mut tw = Typewriter::new("hi");
    while tw.tick() != TypingStep::Finished {}
    for _ in 0..5 {
        assert_eq!(tw.tick(), TypingStep::Finished);
        assert_eq!(tw.visible(), "hi");
    }
}

#[test]
fn empty_text_finishes_on_first_tick() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_finished());
    assert_eq!(tw.tick(), TypingStep::Finished);
    assert_eq!(tw.total_ticks(), 1);
}

#[test]
fn multibyte_characters_reveal_whole_scalars() {
    let mut tw = Typewriter::new("héllo");
    tw.tick();
    assert_eq!(tw.tick(), TypingStep::Revealed("hé".to_owned()));
}
