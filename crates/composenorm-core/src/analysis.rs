//! Cross-reference analysis over normalized services and networks.
//!
//! Both facts need the whole document: a ghost network is only a ghost
//! relative to the top-level declarations, and default-network usage is a
//! property of the service set.

use std::collections::HashSet;

use crate::sections::AttributeSection;
use crate::service::{ServiceMap, ServiceRecord};

/// Facts derived by correlating services with top-level sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReference {
    /// Networks referenced by a service but never declared.
    pub ghost_networks: Vec<String>,
    /// Whether any service implicitly joins the default network.
    pub using_default_network: bool,
}

/// Runs every cross-reference check.
pub fn analyze(
    services: &ServiceMap,
    networks: &AttributeSection,
) -> CrossReference {
    let report = CrossReference {
        ghost_networks: ghost_networks(services, networks),
        using_default_network: uses_default_network(services),
    };
    if !report.ghost_networks.is_empty() {
        tracing::debug!(ghosts = ?report.ghost_networks, "services reference undeclared networks");
    }
    report
}

/// Network names referenced by services but absent from `networks`.
///
/// Each name appears once, in order of first reference.
pub fn ghost_networks(
    services: &ServiceMap,
    networks: &AttributeSection,
) -> Vec<String> {
    let mut seen = HashSet::new();
    services
        .values()
        .flat_map(|service| service.networks.iter())
        .filter(|name| !networks.contains_key(name.as_str()))
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// True iff some service has no `networks` and no `network_mode`.
///
/// A service with `network_mode` set (`host`, `none`, ...) has opted out of
/// network attachment and does not count.
pub fn uses_default_network(services: &ServiceMap) -> bool {
    services.values().any(ServiceRecord::joins_default_network)
}
