//! Diacritic stripping.
//!
//! Accented letters are decomposed into a base letter followed by combining
//! marks, and the marks are dropped. A mark is anything in the Unicode general
//! categories Mn, Mc or Me, which spans the Combining Diacritical Marks block
//! (U+0300..U+036F) and its extensions and supplements, plus the combining
//! marks for symbols and half marks.
//!
//! Characters without a decomposition pass through untouched, so punctuation
//! and symbols are never altered. Letters whose accent is not a separate mark
//! in Unicode (`ø`, `ł`, `đ`) also survive as-is.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::Decomposition;

/// Removes diacritical marks from letters using canonical decomposition.
///
/// ```rust
/// use normalize::normalize_diacritics;
///
/// assert_eq!(normalize_diacritics("Olá, você aí"), "Ola, voce ai");
/// assert_eq!(normalize_diacritics("@_$><=-#!,.`'\""), "@_$><=-#!,.`'\"");
/// ```
pub fn normalize_diacritics(value: &str) -> String {
    strip_marks(value, Decomposition::Canonical)
}

/// Decomposes `value` with the given form and drops every combining mark.
pub(crate) fn strip_marks(value: &str, form: Decomposition) -> String {
    // ASCII has no decompositions and no marks.
    if value.is_ascii() {
        return value.to_owned();
    }
    match form {
        Decomposition::Canonical => value.nfd().filter(|c| !is_combining_mark(*c)).collect(),
        Decomposition::Compatibility => {
            value.nfkd().filter(|c| !is_combining_mark(*c)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_latin_accents() {
        assert_eq!(
            normalize_diacritics("àáãâäéèêëíìîïóòõôöúùûüñçÀÁÃÂÄÉÈÊËÍÌÎÏÓÒÕÔÖÚÙÛÜÑÇ"),
            "aaaaaeeeeiiiiooooouuuuncAAAAAEEEEIIIIOOOOOUUUUNC"
        );
    }

    #[test]
    fn special_characters_untouched() {
        let symbols = "@_$><=-#!,.`'\"";
        assert_eq!(normalize_diacritics(symbols), symbols);
    }

    #[test]
    fn already_decomposed_input() {
        assert_eq!(normalize_diacritics("Cafe\u{0301}"), "Cafe");
        assert_eq!(normalize_diacritics("a\u{0308}\u{0323}"), "a");
    }

    #[test]
    fn extended_mark_blocks() {
        // Combining Diacritical Marks Supplement and Extended.
        assert_eq!(normalize_diacritics("e\u{1DC4}"), "e");
        assert_eq!(normalize_diacritics("o\u{1AB0}"), "o");
        // Combining enclosing circle (Me).
        assert_eq!(normalize_diacritics("A\u{20DD}"), "A");
    }

    #[test]
    fn letters_without_decomposition_survive() {
        assert_eq!(normalize_diacritics("Łódź"), "Łodz");
        assert_eq!(normalize_diacritics("Søren"), "Søren");
        assert_eq!(normalize_diacritics("東京"), "東京");
    }

    #[test]
    fn canonical_keeps_compatibility_characters() {
        assert_eq!(normalize_diacritics("ﬁancé"), "ﬁance");
        assert_eq!(strip_marks("ﬁancé", Decomposition::Compatibility), "fiance");
        assert_eq!(strip_marks("Ｃａｆé²", Decomposition::Compatibility), "Cafe2");
    }

    #[test]
    fn idempotent() {
        for input in ["", "Olá", "Ñandú", "plain", "ﬁ"] {
            let once = normalize_diacritics(input);
            assert_eq!(normalize_diacritics(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_diacritics(""), "");
    }
}
