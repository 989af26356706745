use super::*;

#[test]
fn can_submit_requires_both_fields() {
    assert!(!can_submit("", ""));
    assert!(!can_submit("student@mergington.edu", ""));
    assert!(!can_submit("", "Chess Club"));
}

#[test]
fn can_submit_rejects_whitespace_email() {
    assert!(!can_submit("   ", "Chess Club"));
}

#[test]
fn can_submit_accepts_filled_fields() {
    assert!(can_submit("student@mergington.edu", "Chess Club"));
}
