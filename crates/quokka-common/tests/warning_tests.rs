//! Tests for clearing the warning set.
//!
//! Kept out of the unit tests: clearing is process-wide and would race with
//! the other warning checks running in parallel.

use quokka_common::warning::{clear_warnings, warn_once, was_warned};

#[test]
fn test_clear_warnings_allows_reemitting() {
    warn_once("CSS", "first pass");
    warn_once("Layout", "second message");
    assert!(was_warned("CSS", "first pass"));

    clear_warnings();
    assert!(!was_warned("CSS", "first pass"));
    assert!(!was_warned("Layout", "second message"));

    warn_once("CSS", "first pass");
    assert!(was_warned("CSS", "first pass"));
}
