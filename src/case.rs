//! Case transform primitives shared by every normalizer.
//!
//! With the `unicode-case` feature (default) these use the full Unicode case
//! mapping tables, including one-to-many mappings such as `ß` → `SS` and the
//! final-sigma rule for `Σ`. Without it they fall back to ASCII-only casing and
//! leave every non-ASCII character untouched.
//!
//! Neither mode is locale-tailored: Turkish and Lithuanian special casing are
//! out of scope.

/// Uppercases `value`.
///
/// ```rust
/// use normalize::to_upper_case;
///
/// assert_eq!(to_upper_case("montenegro"), "MONTENEGRO");
/// assert_eq!(to_upper_case(""), "");
/// ```
#[cfg(feature = "unicode-case")]
pub fn to_upper_case(value: &str) -> String {
    value.to_uppercase()
}

/// Uppercases the ASCII letters of `value`.
#[cfg(not(feature = "unicode-case"))]
pub fn to_upper_case(value: &str) -> String {
    value.to_ascii_uppercase()
}

/// Lowercases `value`.
///
/// ```rust
/// use normalize::to_lower_case;
///
/// assert_eq!(to_lower_case("MONtenegro"), "montenegro");
/// ```
#[cfg(feature = "unicode-case")]
pub fn to_lower_case(value: &str) -> String {
    value.to_lowercase()
}

/// Lowercases the ASCII letters of `value`.
#[cfg(not(feature = "unicode-case"))]
pub fn to_lower_case(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Uppercases a single scalar, which may expand to several (`ß` → `SS`).
pub(crate) fn push_upper(out: &mut String, ch: char) {
    let mut buf = [0u8; 4];
    out.push_str(&to_upper_case(ch.encode_utf8(&mut buf)));
}
