//! Comparison fingerprints.
//!
//! A fingerprint is a stable key for normalized text, suitable for
//! deduplicating names or using as a lookup key.
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || normalized_text_bytes)
//! ```
//!
//! The version prefix keeps fingerprints produced under different
//! [`NormalizerConfig`](crate::NormalizerConfig) versions apart even when the
//! normalized text is identical.

use sha2::{Digest, Sha256};

/// Version-aware fingerprint of already-normalized text, as 64 hex chars.
///
/// ```rust
/// use normalize::{fingerprint, normalize};
///
/// let a = fingerprint(1, &normalize("  José  Saramago"));
/// let b = fingerprint(1, &normalize("JOSE SARAMAGO"));
/// assert_eq!(a, b);
/// assert_ne!(a, fingerprint(2, &normalize("jose saramago")));
/// ```
pub fn fingerprint(version: u32, normalized: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.to_be_bytes());
    hasher.update([0]);
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

/// Plain SHA-256 of `text` as hex, with no version prefix.
pub fn hash_text(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
