//! Engine warnings with deduplication.
//!
//! Unsupported input (an unknown `display` keyword, a property value the
//! layout engine cannot use) is never an error: the engine falls back to a
//! default and reports it here. Each distinct message is emitted once through
//! [`log::warn!`] until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::Mutex;

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature (emitted once per unique message)
///
/// # Example
/// ```
/// quokka_common::warning::warn_once("CSS", "unsupported display value 'flex'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");

    // The set stays valid even if a holder panicked.
    let mut guard = WARNED.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let should_emit = guard.get_or_insert_with(HashSet::new).insert(key);
    drop(guard);

    if should_emit {
        log::warn!(target: "quokka", "[Quokka {component}] {message}");
    }
}

/// Returns true if `message` from `component` has already been emitted.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let guard = WARNED.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.as_ref().is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call between render passes)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
