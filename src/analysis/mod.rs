//! Normalization and property computation.
//!
//! Every downstream computation runs on the output of [`normalize`], never on
//! the raw input.

pub mod normalize;
pub mod properties;

pub use normalize::{comparison_form, fold_char, normalize};
pub use properties::analyze_normalized;

use crate::types::identifiers::ContentHash;
use crate::types::record::StringProperties;

/// Normalize `raw` and compute its properties.
pub fn analyze(raw: &str) -> StringProperties {
    let normalized = normalize(raw);
    let properties = analyze_normalized(&normalized);
    tracing::debug!(
        id = %properties.sha256_hash,
        length = properties.length,
        "analyzed value"
    );
    properties
}

/// Content hash of the normalized form of `raw`.
pub fn content_hash(raw: &str) -> ContentHash {
    ContentHash::of_normalized(&normalize(raw))
}
