use super::*;

// =============================================================
// Text handling
// =============================================================

#[test]
fn text_is_trimmed() {
    let line = StatusLine::error("  Login failed.  ");
    assert_eq!(line.text(), "Login failed.");
}

#[test]
fn whitespace_only_text_is_empty() {
    let line = StatusLine::info("   ");
    assert!(line.is_empty());
}

// =============================================================
// Class computation
// =============================================================

#[test]
fn info_line_has_base_class_only() {
    let line = StatusLine::info("Check your inbox.");
    assert_eq!(line.class_attr(), "message");
}

#[test]
fn error_line_adds_error_class() {
    let line = StatusLine::error("Login failed.");
    assert_eq!(line.class_attr(), "message error");
}

#[test]
fn success_line_adds_success_class() {
    let line = StatusLine::success("You successfully logged in.");
    assert_eq!(line.class_attr(), "message success");
}

#[test]
fn empty_line_is_hidden() {
    assert_eq!(StatusLine::empty().class_attr(), "message hidden");
}

#[test]
fn empty_error_line_keeps_severity_class_and_hides() {
    let line = StatusLine::error("");
    assert_eq!(line.class_attr(), "message error hidden");
    assert_eq!(line.severity(), Severity::Error);
}
