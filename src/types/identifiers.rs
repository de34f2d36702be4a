use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of a normalized value.
///
/// Lowercase hex SHA-256, no prefix. Doubles as the record id and the
/// deduplication fingerprint, so it must never depend on anything but the
/// normalized bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hash an already-normalized value.
    pub fn of_normalized(normalized: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());

        let hash = hasher.finalize();

        ContentHash(hex::encode(hash))
    }

    /// Wrap a hex digest received from a caller. No validation: an id that
    /// was never produced by `of_normalized` simply never matches a record.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        ContentHash(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
