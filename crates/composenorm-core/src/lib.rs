//! # composenorm-core
//!
//! Normalization engine for Docker Compose documents.
//!
//! Handles:
//! - **Raw**: The untyped input tree and its total accessors.
//! - **Loader**: YAML/JSON text to raw tree.
//! - **Fields**: One normalizer per compose field family.
//! - **Service**: Fixed-shape per-service records.
//! - **Sections**: Top-level `networks`, `volumes`, and `version`.
//! - **Analysis**: Ghost networks and default-network usage.
//! - **Document**: The pipeline assembling the final record.

pub mod analysis;
pub mod document;
pub mod fields;
pub mod loader;
pub mod raw;
pub mod sections;
pub mod service;

pub use document::{DocumentRecord, MetaRecord, normalize, normalize_with};
pub use raw::{RawMapping, RawValue};
pub use service::{ServiceMap, ServiceRecord};
