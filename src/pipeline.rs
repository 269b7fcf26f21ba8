//! Configurable composite normalizer.
//!
//! [`Normalizer`] owns a validated [`NormalizerConfig`] and runs the same
//! steps as [`normalize`](crate::normalize), minus any the config switches
//! off. It also derives comparison fingerprints from the normalized form.

use std::borrow::Cow;

use tracing::{debug, trace, Level};

use crate::case::to_lower_case;
use crate::composite::TextInput;
use crate::config::NormalizerConfig;
use crate::diacritics::strip_marks;
use crate::error::NormalizeError;
use crate::hash::fingerprint;
use crate::whitespace::normalize_whitespaces;

/// A validated, reusable composite normalizer.
///
/// With the default config it produces exactly what [`normalize`](crate::normalize)
/// does. Build one with [`Normalizer::new`] to switch steps off or to fold
/// compatibility characters.
///
/// ```rust
/// use normalize::{Decomposition, Normalizer, NormalizerConfig};
///
/// let normalizer = Normalizer::new(NormalizerConfig {
///     decomposition: Decomposition::Compatibility,
///     ..Default::default()
/// })?;
/// assert_eq!(normalizer.apply("  ﬁANCÉ  "), "fiance");
/// assert!(normalizer.equivalent("Zoë", "ZOE"));
/// # Ok::<(), normalize::NormalizeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    cfg: NormalizerConfig,
}

impl Normalizer {
    /// Validates `cfg` and builds a normalizer from it.
    pub fn new(cfg: NormalizerConfig) -> Result<Self, NormalizeError> {
        cfg.validate()?;
        debug!(
            version = cfg.version,
            decomposition = ?cfg.decomposition,
            strip_diacritics = cfg.strip_diacritics,
            collapse_whitespace = cfg.collapse_whitespace,
            lowercase = cfg.lowercase,
            "normalizer_configured"
        );
        Ok(Self { cfg })
    }

    /// The config this normalizer was built from.
    pub fn config(&self) -> &NormalizerConfig {
        &self.cfg
    }

    /// Joins `values` and runs the enabled steps in the order
    /// diacritics → whitespace → lowercase.
    pub fn apply<T: TextInput + ?Sized>(&self, values: &T) -> String {
        let span = tracing::span!(Level::TRACE, "normalize.apply", version = self.cfg.version);
        let _guard = span.enter();

        let mut text: Cow<'_, str> = values.joined();
        let input_len = text.len();

        if self.cfg.strip_diacritics {
            text = Cow::Owned(strip_marks(&text, self.cfg.decomposition));
        }
        if self.cfg.collapse_whitespace {
            text = Cow::Owned(normalize_whitespaces(&text));
        }
        if self.cfg.lowercase {
            text = Cow::Owned(to_lower_case(&text));
        }

        trace!(input_len, output_len = text.len(), "normalize_applied");
        text.into_owned()
    }

    /// Fingerprint of the normalized form, keyed by the config version.
    pub fn fingerprint<T: TextInput + ?Sized>(&self, values: &T) -> String {
        fingerprint(self.cfg.version, &self.apply(values))
    }

    /// True when both inputs normalize to the same text.
    pub fn equivalent<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: TextInput + ?Sized,
        B: TextInput + ?Sized,
    {
        self.apply(a) == self.apply(b)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            cfg: NormalizerConfig::default(),
        }
    }
}
