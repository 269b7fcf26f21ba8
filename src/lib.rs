//! String normalization helpers.
//!
//! Small, pure transforms for cleaning up text before display or comparison,
//! typically user-entered names.
//!
//! ## What we do
//!
//! - [`normalize_whitespaces`]: trim and collapse every whitespace run to one space
//! - [`normalize_diacritics`]: decompose accented letters and drop the marks
//! - [`normalize_name`]: collapse whitespace, lowercase, capitalize each word
//! - [`normalize_paragraph`]: collapse whitespace, end with a period, capitalize
//! - [`normalize`]: join, strip diacritics, collapse whitespace, lowercase
//!
//! [`to_upper_case`] / [`to_lower_case`] are the casing primitives the others
//! share. They use full Unicode case mapping under the default `unicode-case`
//! feature and ASCII casing without it.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no shared state. Same input, same output, on any thread.
//! Nothing here can fail except building a [`Normalizer`] from an invalid
//! [`NormalizerConfig`].
//!
//! ## Example
//!
//! ```rust
//! use normalize::{normalize, normalize_name, normalize_paragraph};
//!
//! assert_eq!(normalize_name(" fernanda \tMONTENEGRO"), "Fernanda Montenegro");
//! assert_eq!(
//!     normalize_paragraph("hello world, my friend\r\n"),
//!     "Hello world, my friend."
//! );
//! assert_eq!(
//!     normalize(&["    Olá, \r\n", "Fernanda \t MONtenegro"]),
//!     "ola, fernanda montenegro"
//! );
//! ```

mod case;
mod composite;
mod config;
mod diacritics;
mod error;
mod hash;
mod name;
mod paragraph;
mod pipeline;
mod whitespace;

pub use crate::case::{to_lower_case, to_upper_case};
pub use crate::composite::{normalize, TextInput};
pub use crate::config::{Decomposition, NormalizerConfig};
pub use crate::diacritics::normalize_diacritics;
pub use crate::error::NormalizeError;
pub use crate::hash::{fingerprint, hash_text};
pub use crate::name::normalize_name;
pub use crate::paragraph::normalize_paragraph;
pub use crate::pipeline::Normalizer;
pub use crate::whitespace::normalize_whitespaces;
