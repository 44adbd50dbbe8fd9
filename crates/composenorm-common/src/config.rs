//! Normalizer configuration model.

use serde::{Deserialize, Serialize};

/// Tunables for a normalization pass.
///
/// The defaults reproduce the strict pass-through behavior: nothing is
/// invented that the document does not state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Version reported in `meta.version` when the document has no
    /// top-level `version` key (or it is null).
    pub default_version: Option<String>,
}

impl NormalizerConfig {
    /// Sets the fallback version.
    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = Some(version.into());
        self
    }
}
