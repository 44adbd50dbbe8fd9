//! Fixed-shape per-service records.

use indexmap::IndexMap;
use serde::Serialize;

use crate::fields;
use crate::raw::RawValue;

/// Canonical form of one service entry.
///
/// Every field is always present: absent input becomes `None` or an empty
/// list, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    /// Image reference.
    pub image: Option<String>,
    /// Build context.
    pub build: Option<String>,
    /// Port tokens in short form.
    pub ports: Vec<String>,
    /// Container-only ports.
    pub expose: Vec<String>,
    /// Attached networks; empty means the default network.
    pub networks: Vec<String>,
    /// Explicit network mode (`host`, `none`, `service:...`).
    pub network_mode: Option<String>,
    /// Services this one depends on.
    pub depends_on: Vec<String>,
    /// Legacy links.
    pub links: Vec<String>,
    /// Mount tokens in short form.
    pub volumes: Vec<String>,
}

impl ServiceRecord {
    /// Returns `true` when the service implicitly joins the default network:
    /// no `networks` and no `network_mode` override.
    pub fn joins_default_network(&self) -> bool {
        self.networks.is_empty() && self.network_mode.is_none()
    }
}

/// Services by name, in document order.
pub type ServiceMap = IndexMap<String, ServiceRecord>;

/// Normalizes one raw service entry.
///
/// A value that is not a mapping yields the all-default record.
pub fn normalize_service(raw: &RawValue) -> ServiceRecord {
    if raw.as_mapping().is_none() {
        if !raw.is_null() {
            tracing::debug!(kind = raw.kind(), "service body is not a mapping, using defaults");
        }
        return ServiceRecord::default();
    }

    ServiceRecord {
        image: fields::image(raw.get("image")),
        build: fields::build(raw.get("build")),
        ports: fields::ports(raw.get("ports")),
        expose: fields::expose(raw.get("expose")),
        networks: fields::networks(raw.get("networks")),
        network_mode: fields::network_mode(raw.get("network_mode")),
        depends_on: fields::depends_on(raw.get("depends_on")),
        links: fields::links(raw.get("links")),
        volumes: fields::volumes(raw.get("volumes")),
    }
}
