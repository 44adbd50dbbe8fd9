//! Top-level `networks`, `volumes`, and `version` sections.
//!
//! Network and volume attributes are driver-specific, so their bodies are
//! passed through shallowly rather than normalized.

use composenorm_common::config::NormalizerConfig;
use composenorm_common::constants::VERSION_KEY;

use indexmap::IndexMap;

use crate::raw::{RawMapping, RawValue};

/// Opaque attributes of one declared network or volume.
pub type AttributeRecord = RawMapping;

/// Declared networks or volumes, by name.
pub type AttributeSection = IndexMap<String, AttributeRecord>;

/// Normalizes a `networks` or `volumes` section.
///
/// Entries with a null or non-mapping body become empty records. A section
/// that is not a mapping is treated as empty.
pub fn normalize_attribute_section(raw: &RawValue) -> AttributeSection {
    let Some(entries) = raw.as_mapping() else {
        if !raw.is_null() {
            tracing::debug!(kind = raw.kind(), "section is not a mapping, treating as empty");
        }
        return AttributeSection::new();
    };

    entries
        .iter()
        .map(|(name, body)| {
            let attributes = body.as_mapping().cloned().unwrap_or_default();
            (name.clone(), attributes)
        })
        .collect()
}

/// Reads the top-level `version`, falling back to the configured default.
pub fn normalize_version(root: &RawValue, config: &NormalizerConfig) -> Option<String> {
    root.get(VERSION_KEY)
        .as_string_or_null()
        .or_else(|| config.default_version.clone())
}
