//! Merge rules for fetched content over compiled defaults
//!
//! Text fields: a fetched value wins only when it is non-blank after
//! trimming, and the winning value is kept verbatim (not trimmed).
//! Collections replace wholesale: a non-empty fetched list wins, anything
//! else keeps the default list. There is no per-item merging.

/// Prefer `fetched` when it has visible content, otherwise the default.
pub fn text(fetched: Option<String>, default_value: &str) -> String {
    match fetched {
        Some(value) if !value.trim().is_empty() => value,
        _ => default_value.to_string(),
    }
}

/// Whole-collection replacement: a non-empty fetched list wins.
pub fn items<T: Clone>(fetched: Vec<T>, default_items: &[T]) -> Vec<T> {
    if fetched.is_empty() {
        default_items.to_vec()
    } else {
        fetched
    }
}

/// Collection rule for optional wire fields.
pub fn opt_items<T: Clone>(fetched: Option<Vec<T>>, default_items: &[T]) -> Vec<T> {
    items(fetched.unwrap_or_default(), default_items)
}
