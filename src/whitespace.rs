//! Whitespace normalization.
//!
//! Whitespace here means Unicode `White_Space`: ASCII space, tab, newline and
//! carriage return, plus no-break space, the EM/EN spaces, line and paragraph
//! separators and the rest of the property.
//!
//! This is not the same set as a JavaScript regex `\s`: U+0085 (NEL) is
//! `White_Space` and gets collapsed, while U+FEFF (byte order mark) is not
//! and is kept as-is.
//!
//! # Algorithm
//!
//! 1. Split the text on every maximal run of whitespace
//! 2. Join the non-empty segments with a single U+0020
//!
//! The result therefore has no leading or trailing whitespace, and applying
//! it twice is the same as applying it once.

/// Trims both ends and replaces every run of whitespace with one plain space.
///
/// # Examples
///
/// ```rust
/// use normalize::normalize_whitespaces;
///
/// assert_eq!(
///     normalize_whitespaces("  Fernanda \t Montenegro\r\n"),
///     "Fernanda Montenegro"
/// );
///
/// // Whitespace-only input collapses to nothing.
/// assert_eq!(normalize_whitespaces(" \n\t "), "");
///
/// // No-break space counts as whitespace.
/// assert_eq!(normalize_whitespaces("a\u{00A0}b"), "a b");
/// ```
pub fn normalize_whitespaces(value: &str) -> String {
    let mut collapsed = String::with_capacity(value.len());
    for segment in value.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
