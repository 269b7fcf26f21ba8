//! Configuration for the [`Normalizer`](crate::Normalizer) pipeline.
//!
//! The free functions ([`normalize`](crate::normalize) and friends) take no
//! configuration. [`NormalizerConfig`] exists for callers that want to switch
//! individual steps off, fold compatibility characters, or version their
//! comparison fingerprints.
//!
//! # Versioning
//!
//! `version` is folded into every fingerprint produced by a configured
//! normalizer. Bump it whenever a config change can alter normalized output so
//! that fingerprints from the old and new behaviour never collide.
//!
//! # Examples
//!
//! ```rust
//! use normalize::{Decomposition, NormalizerConfig};
//!
//! let config = NormalizerConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.decomposition, Decomposition::Canonical);
//! assert!(config.strip_diacritics);
//! assert!(config.collapse_whitespace);
//! assert!(config.lowercase);
//!
//! // Keep the original case, fold ligatures and full-width forms.
//! let display = NormalizerConfig {
//!     lowercase: false,
//!     decomposition: Decomposition::Compatibility,
//!     ..Default::default()
//! };
//! assert!(display.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Unicode decomposition applied before combining marks are stripped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Decomposition {
    /// NFD. Only canonically equivalent forms are split apart.
    #[default]
    Canonical,
    /// NFKD. Also folds compatibility characters (`ﬁ` → `fi`, `Ａ` → `A`, `²` → `2`).
    Compatibility,
}

/// Configuration for the composite normalization pipeline.
///
/// Steps always run in the fixed order diacritics → whitespace → lowercase;
/// the flags only decide which of them run. `decomposition` is only consulted
/// when `strip_diacritics` is on.
///
/// Serialized as:
///
/// ```json
/// {
///   "version": 1,
///   "decomposition": "canonical",
///   "strip_diacritics": true,
///   "collapse_whitespace": true,
///   "lowercase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Behaviour version. Must be >= 1; 0 is reserved.
    pub version: u32,
    /// Decomposition form used by the diacritic step.
    pub decomposition: Decomposition,
    /// Strip combining marks after decomposition.
    pub strip_diacritics: bool,
    /// Collapse whitespace runs to one space and trim.
    pub collapse_whitespace: bool,
    /// Lowercase the result.
    pub lowercase: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            decomposition: Decomposition::Canonical,
            strip_diacritics: true,
            collapse_whitespace: true,
            lowercase: true,
        }
    }
}

impl NormalizerConfig {
    /// Checks the invariants a [`Normalizer`](crate::Normalizer) relies on.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if !(self.strip_diacritics || self.collapse_whitespace || self.lowercase) {
            return Err(NormalizeError::InvalidConfig(
                "at least one normalization step must be enabled".into(),
            ));
        }
        Ok(())
    }
}
