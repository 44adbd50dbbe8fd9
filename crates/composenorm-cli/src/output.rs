//! Rendering of normalized documents for the terminal or a file.

use std::fmt::Write as _;

use clap::ValueEnum;
use composenorm_core::DocumentRecord;

/// Serialization format for `normalize` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Serializes a document. Output always ends with a newline.
///
/// `pretty` only affects JSON; YAML is always block style.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_document(
    document: &DocumentRecord,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    let mut text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(document)?,
        OutputFormat::Json => serde_json::to_string(document)?,
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Human-readable summary of the cross-reference facts.
pub fn render_audit(document: &DocumentRecord, label: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Audit for: {label}");
    let _ = writeln!(
        out,
        "  version: {}",
        document.meta.version.as_deref().unwrap_or("(unspecified)")
    );
    let _ = writeln!(out, "  services: {}", document.services.len());
    let _ = writeln!(out, "  declared networks: {}", document.networks.len());

    if document.meta.using_default_network {
        let joined: Vec<&str> = document
            .services
            .iter()
            .filter(|(_, service)| service.joins_default_network())
            .map(|(name, _)| name.as_str())
            .collect();
        let _ = writeln!(out, "  default network: in use ({})", joined.join(", "));
    } else {
        let _ = writeln!(out, "  default network: not used");
    }

    if document.ghost_networks().is_empty() {
        let _ = writeln!(out, "  ghost networks: none");
    } else {
        let _ = writeln!(
            out,
            "  ghost networks: {}",
            document.ghost_networks().join(", ")
        );
    }
    out
}
