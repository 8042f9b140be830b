//! Gate for the short-form feed.
//!
//! Populated short-form count labels are rendered with a non-breaking space
//! between number and unit. A label that is present but lacks one is treated
//! as a placeholder for a barely-watched item.

const NBSP: char = '\u{a0}';

/// True when the active short should be skipped.
///
/// A missing or empty label is never bad.
pub fn is_bad_short(label: Option<&str>) -> bool {
    match label {
        None => false,
        Some(text) if text.is_empty() => false,
        Some(text) => !text.contains(NBSP),
    }
}
