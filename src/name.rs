//! Person-name capitalization.

use crate::case::{push_upper, to_lower_case};
use crate::whitespace::normalize_whitespaces;

/// Normalizes whitespace and capitalizes every word of a name.
///
/// The whole string is lowercased first, then each word character found at
/// the start of the string or right after a space is uppercased. A word that
/// starts with punctuation (`"(ana"`, `"'s"`) keeps its first letter
/// lowercase, and hyphenated parts after the first are not capitalized.
/// Word characters are ASCII `[A-Za-z0-9_]`, so a word that starts with a
/// non-ASCII letter such as `É` is left lowercase.
///
/// ```rust
/// use normalize::normalize_name;
///
/// assert_eq!(normalize_name(" fernanda \tMONTENEGRO"), "Fernanda Montenegro");
/// assert_eq!(normalize_name("jean-luc PICARD"), "Jean-luc Picard");
/// ```
pub fn normalize_name(value: &str) -> String {
    let lowered = to_lower_case(&normalize_whitespaces(value));
    let mut capitalized = String::with_capacity(lowered.len());
    let mut at_boundary = true;
    for ch in lowered.chars() {
        if at_boundary && is_word_char(ch) {
            push_upper(&mut capitalized, ch);
        } else {
            capitalized.push(ch);
        }
        at_boundary = ch == ' ';
    }
    capitalized
}

/// ASCII `\w`.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_case_and_spacing() {
        assert_eq!(
            normalize_name(" fernanda \tMONTENEGRO"),
            "Fernanda Montenegro"
        );
        assert_eq!(normalize_name("DA  silva\r\nJR"), "Da Silva Jr");
    }

    #[cfg(feature = "unicode-case")]
    #[test]
    fn non_ascii_initial_stays_lowercase() {
        assert_eq!(normalize_name("JOÃO  da\r\nSILVA"), "João Da Silva");
        assert_eq!(normalize_name("ÉMILE zola"), "émile Zola");
        assert_eq!(normalize_name("ângela ÇELIK"), "ângela çelik");
    }

    #[test]
    fn non_word_prefix_is_left_alone() {
        assert_eq!(normalize_name("(ANA) maria"), "(ana) Maria");
        assert_eq!(normalize_name("o'NEIL"), "O'neil");
        assert_eq!(normalize_name("mary-JANE"), "Mary-jane");
    }

    #[test]
    fn digits_and_underscore_are_word_chars() {
        assert_eq!(normalize_name("_x 2nd"), "_x 2nd");
        assert_eq!(normalize_name("louis xiv"), "Louis Xiv");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name(" \t\n"), "");
    }

    #[test]
    fn idempotent_on_output() {
        for input in [" fernanda \tMONTENEGRO", "ÉMILE zola", "(ana) maria"] {
            let once = normalize_name(input);
            assert_eq!(normalize_name(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn word_char_classes() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(!is_word_char('É'));
        assert!(!is_word_char('\u{0301}'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('('));
        assert!(!is_word_char(' '));
    }
}
