use super::*;

// =============================================================
// StatusState defaults
// =============================================================

#[test]
fn status_state_default_is_hidden() {
    let state = StatusState::default();
    assert!(!state.visible);
    assert!(state.text.is_empty());
}

#[test]
fn status_kind_default_is_success() {
    assert_eq!(StatusKind::default(), StatusKind::Success);
}

// =============================================================
// Show / hide lifecycle
// =============================================================

#[test]
fn show_sets_text_kind_and_visibility() {
    let mut state = StatusState::default();
    state.show("Signed up!".to_owned(), StatusKind::Success);

    assert!(state.visible);
    assert_eq!(state.text, "Signed up!");
    assert_eq!(state.kind, StatusKind::Success);
}

#[test]
fn show_returns_increasing_epochs() {
    let mut state = StatusState::default();
    let first = state.show("one".to_owned(), StatusKind::Success);
    let second = state.show("two".to_owned(), StatusKind::Error);
    assert!(second > first);
}

#[test]
fn hide_with_current_epoch_hides() {
    let mut state = StatusState::default();
    let epoch = state.show("Signed up!".to_owned(), StatusKind::Success);

    state.hide(epoch);
    assert!(!state.visible);
}

#[test]
fn hide_with_stale_epoch_keeps_newer_message() {
    let mut state = StatusState::default();
    let first = state.show("one".to_owned(), StatusKind::Success);
    state.show("two".to_owned(), StatusKind::Error);

    // The first message's timer fires after a second message was shown.
    state.hide(first);
    assert!(state.visible);
    assert_eq!(state.text, "two");
    assert_eq!(state.kind, StatusKind::Error);
}

#[test]
fn show_after_hide_is_visible_again() {
    let mut state = StatusState::default();
    let epoch = state.show("one".to_owned(), StatusKind::Error);
    state.hide(epoch);

    state.show("two".to_owned(), StatusKind::Success);
    assert!(state.visible);
    assert_eq!(state.text, "two");
}
