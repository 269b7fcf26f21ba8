//! Sentence/paragraph formatting.

use crate::case::push_upper;
use crate::whitespace::normalize_whitespaces;

/// Normalizes whitespace, ends the text with a period and uppercases its
/// first character.
///
/// Whitespace is collapsed first, so trailing newlines never end up between
/// the text and its period. Only the first character changes case; the rest
/// of the text is kept verbatim.
///
/// ```rust
/// use normalize::normalize_paragraph;
///
/// assert_eq!(
///     normalize_paragraph("hello world, my friend\r\n"),
///     "Hello world, my friend."
/// );
/// assert_eq!(normalize_paragraph("Done."), "Done.");
/// assert_eq!(normalize_paragraph(""), ".");
/// ```
pub fn normalize_paragraph(value: &str) -> String {
    let mut sentence = normalize_whitespaces(value);
    if !sentence.ends_with('.') {
        sentence.push('.');
    }
    capitalize_first(&sentence)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(text.len());
    push_upper(&mut out, first);
    out.push_str(chars.as_str());
    out
}
