//! Deduplicated warnings for recoverable markup problems.
//!
//! The parser never rejects input, so every policy that silently drops or
//! repairs something reports here instead. Each unique message is emitted once
//! through `tracing` until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable problem (emitted once per unique message).
///
/// Returns `true` if this call emitted the warning, `false` if the same
/// component/message pair was already reported.
///
/// # Example
/// ```
/// use birch_common::warning::warn_once;
///
/// let _ = warn_once("HTML Parser", "stray-end-tag: closing tag with no open element ignored");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        tracing::warn!(target: "birch", component, "{message}");
    }
    should_emit
}

/// Clear all recorded warnings (call before parsing an unrelated document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
