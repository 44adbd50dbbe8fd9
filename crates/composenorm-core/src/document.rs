//! Document assembly: the pipeline from raw tree to `DocumentRecord`.

use std::path::Path;

use serde::Serialize;

use composenorm_common::config::NormalizerConfig;
use composenorm_common::constants::{NETWORKS_KEY, SERVICES_KEY, VOLUMES_KEY};
use composenorm_common::error::{ComposeError, Result};
use composenorm_common::types::SourceFormat;

use crate::analysis;
use crate::loader;
use crate::raw::RawValue;
use crate::sections::{self, AttributeSection};
use crate::service::{self, ServiceMap};

/// Document-level facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaRecord {
    /// Top-level `version`, if any.
    pub version: Option<String>,
    /// Whether any service implicitly joins the default network.
    pub using_default_network: bool,
    /// Networks referenced by services but not declared at top level.
    pub ghost_networks: Vec<String>,
}

/// Canonical form of a whole compose document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentRecord {
    /// Version and derived cross-reference facts.
    pub meta: MetaRecord,
    /// Services by name, in document order.
    pub services: ServiceMap,
    /// Declared networks with opaque attributes.
    pub networks: AttributeSection,
    /// Declared volumes with opaque attributes.
    pub volumes: AttributeSection,
}

impl DocumentRecord {
    /// Networks referenced by services but never declared.
    pub fn ghost_networks(&self) -> &[String] {
        &self.meta.ghost_networks
    }
}

/// Normalizes a raw document with the default configuration.
///
/// # Errors
///
/// Returns [`ComposeError::MalformedDocument`] if the root is not a mapping.
pub fn normalize(root: &RawValue) -> Result<DocumentRecord> {
    normalize_with(root, &NormalizerConfig::default())
}

/// Normalizes a raw document.
///
/// Field- and service-level anomalies resolve to defaults; only the root
/// shape can fail.
///
/// # Errors
///
/// Returns [`ComposeError::MalformedDocument`] if the root is not a mapping.
pub fn normalize_with(root: &RawValue, config: &NormalizerConfig) -> Result<DocumentRecord> {
    if root.as_mapping().is_none() {
        return Err(ComposeError::MalformedDocument { found: root.kind() });
    }
    tracing::info!("normalizing compose document");

    let services = normalize_services(root.get(SERVICES_KEY));
    let networks = sections::normalize_attribute_section(root.get(NETWORKS_KEY));
    let volumes = sections::normalize_attribute_section(root.get(VOLUMES_KEY));
    let xref = analysis::analyze(&services, &networks);

    tracing::info!(
        services = services.len(),
        networks = networks.len(),
        volumes = volumes.len(),
        ghosts = xref.ghost_networks.len(),
        "document normalized"
    );

    Ok(DocumentRecord {
        meta: MetaRecord {
            version: sections::normalize_version(root, config),
            using_default_network: xref.using_default_network,
            ghost_networks: xref.ghost_networks,
        },
        services,
        networks,
        volumes,
    })
}

/// Loads and normalizes compose text.
///
/// # Errors
///
/// Returns an error if the text does not parse or its root is not a mapping.
pub fn normalize_str(
    text: &str,
    format: SourceFormat,
    config: &NormalizerConfig,
) -> Result<DocumentRecord> {
    let root = loader::load_str(text, format)?;
    normalize_with(&root, config)
}

/// Loads and normalizes a compose file, detecting its format from the path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or its root
/// is not a mapping.
pub fn normalize_file(path: &Path, config: &NormalizerConfig) -> Result<DocumentRecord> {
    let root = loader::load_file(path)?;
    normalize_with(&root, config)
}

fn normalize_services(raw: &RawValue) -> ServiceMap {
    let Some(entries) = raw.as_mapping() else {
        if !raw.is_null() {
            tracing::debug!(kind = raw.kind(), "services section is not a mapping");
        }
        return ServiceMap::new();
    };

    entries
        .iter()
        .map(|(name, body)| {
            tracing::debug!(service = %name, "normalizing service");
            (name.clone(), service::normalize_service(body))
        })
        .collect()
}
