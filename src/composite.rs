//! The composite normalizer and the input shapes it accepts.

use std::borrow::Cow;

use crate::case::to_lower_case;
use crate::diacritics::normalize_diacritics;
use crate::whitespace::normalize_whitespaces;

/// Text accepted by [`normalize`]: a single string, or an ordered sequence of
/// strings joined with one plain space.
///
/// Single strings are borrowed; sequences of two or more allocate the joined
/// string.
pub trait TextInput {
    /// The text to normalize, with sequence elements joined by `' '`.
    fn joined(&self) -> Cow<'_, str>;
}

impl TextInput for str {
    fn joined(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextInput for String {
    fn joined(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TextInput for Cow<'_, str> {
    fn joined(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<S: AsRef<str>> TextInput for [S] {
    fn joined(&self) -> Cow<'_, str> {
        join_with_space(self)
    }
}

impl<S: AsRef<str>, const N: usize> TextInput for [S; N] {
    fn joined(&self) -> Cow<'_, str> {
        join_with_space(self.as_slice())
    }
}

impl<S: AsRef<str>> TextInput for Vec<S> {
    fn joined(&self) -> Cow<'_, str> {
        join_with_space(self.as_slice())
    }
}

impl<T: TextInput + ?Sized> TextInput for &T {
    fn joined(&self) -> Cow<'_, str> {
        (**self).joined()
    }
}

fn join_with_space<S: AsRef<str>>(parts: &[S]) -> Cow<'_, str> {
    match parts {
        [] => Cow::Borrowed(""),
        [only] => Cow::Borrowed(only.as_ref()),
        [first, rest @ ..] => {
            let len = parts.iter().map(|p| p.as_ref().len() + 1).sum::<usize>();
            let mut joined = String::with_capacity(len);
            joined.push_str(first.as_ref());
            for part in rest {
                joined.push(' ');
                joined.push_str(part.as_ref());
            }
            Cow::Owned(joined)
        }
    }
}

/// Joins, strips diacritics, collapses whitespace and lowercases, in that order.
///
/// This is the crate's default normalization, suited to comparing
/// user-entered text. For a configurable variant see
/// [`Normalizer`](crate::Normalizer).
///
/// ```rust
/// use normalize::normalize;
///
/// assert_eq!(
///     normalize(&["    Olá, \r\n", "Fernanda \t MONtenegro"]),
///     "ola, fernanda montenegro"
/// );
/// assert_eq!(normalize("  Ação  "), "acao");
///
/// let empty: [&str; 0] = [];
/// assert_eq!(normalize(&empty), "");
/// ```
pub fn normalize<T: TextInput + ?Sized>(values: &T) -> String {
    let joined = values.joined();
    to_lower_case(&normalize_whitespaces(&normalize_diacritics(&joined)))
}
