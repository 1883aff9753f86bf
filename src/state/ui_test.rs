use super::*;

// =============================================================
// Section
// =============================================================

#[test]
fn default_section_is_compose() {
    assert_eq!(Section::default(), Section::Compose);
    assert_eq!(UiState::default().section, Section::Compose);
}

#[test]
fn section_variants_are_distinct() {
    assert_ne!(Section::Compose, Section::ThankYou);
    assert_ne!(Section::Compose, Section::History);
    assert_ne!(Section::ThankYou, Section::History);
}

// =============================================================
// show_section
// =============================================================

#[test]
fn show_section_replaces_visible_section() {
    let mut state = UiState::default();
    state.show_section(Section::History);
    assert_eq!(state.section, Section::History);
    state.show_section(Section::ThankYou);
    assert_eq!(state.section, Section::ThankYou);
    state.show_section(Section::Compose);
    assert_eq!(state.section, Section::Compose);
}

#[test]
fn show_section_is_idempotent() {
    let mut state = UiState::default();
    state.show_section(Section::History);
    state.show_section(Section::History);
    assert_eq!(state.section, Section::History);
}

// =============================================================
// Focus sequence counters
// =============================================================

#[test]
fn focus_requests_bump_their_counters() {
    let mut state = UiState::default();
    assert_eq!(state.poll_topic_focus_seq, 0);
    assert_eq!(state.poll_answer_focus_seq, 0);

    state.focus_poll_topic();
    assert_eq!(state.poll_topic_focus_seq, 1);
    assert_eq!(state.poll_answer_focus_seq, 0);

    state.focus_poll_answer();
    state.focus_poll_answer();
    assert_eq!(state.poll_topic_focus_seq, 1);
    assert_eq!(state.poll_answer_focus_seq, 2);
}

#[test]
fn show_section_does_not_touch_focus_counters() {
    let mut state = UiState::default();
    state.focus_poll_topic();
    state.show_section(Section::History);
    assert_eq!(state.poll_topic_focus_seq, 1);
}
