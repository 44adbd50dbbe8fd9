//! Turns compose text into a raw tree.
//!
//! YAML merge keys (`<<: *defaults`) are applied here so the engine sees the
//! merged service bodies; everything else is left as written.

use std::path::Path;

use composenorm_common::error::{ComposeError, Result};
use composenorm_common::types::SourceFormat;

use crate::raw::RawValue;

/// Parses `text` in the given format.
///
/// # Errors
///
/// Returns [`ComposeError::Load`] if the text is not valid in `format`.
pub fn load_str(text: &str, format: SourceFormat) -> Result<RawValue> {
    match format {
        SourceFormat::Yaml => {
            let mut value: serde_yaml::Value =
                serde_yaml::from_str(text).map_err(|e| load_err(format, &e))?;
            value.apply_merge().map_err(|e| load_err(format, &e))?;
            Ok(RawValue::from(value))
        }
        SourceFormat::Json => serde_json::from_str::<serde_json::Value>(text)
            .map(RawValue::from)
            .map_err(|e| load_err(format, &e)),
    }
}

/// Reads and parses a compose file, picking the format from its extension.
///
/// # Errors
///
/// Returns [`ComposeError::Io`] if the file cannot be read, or
/// [`ComposeError::Load`] if its contents do not parse.
pub fn load_file(path: &Path) -> Result<RawValue> {
    tracing::info!(path = %path.display(), "loading compose document");
    let text = std::fs::read_to_string(path).map_err(|source| ComposeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&text, SourceFormat::from_path(path))
}

fn load_err(format: SourceFormat, err: &impl std::fmt::Display) -> ComposeError {
    ComposeError::Load {
        format,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_yaml_mapping() {
        let raw = load_str("services:\n  web:\n    image: nginx\n", SourceFormat::Yaml)
            .expect("load");
        assert_eq!(raw.get("services").get("web").get("image"), &RawValue::from("nginx"));
    }

    #[test]
    fn applies_yaml_merge_keys() {
        let text = "x-base: &base\n  image: app:1\n  network_mode: host\n\
                    services:\n  worker:\n    <<: *base\n    image: app:2\n";
        let raw = load_str(text, SourceFormat::Yaml).expect("load");
        let worker = raw.get("services").get("worker");
        assert_eq!(worker.get("image"), &RawValue::from("app:2"));
        assert_eq!(worker.get("network_mode"), &RawValue::from("host"));
    }

    #[test]
    fn loads_json_preserving_key_order() {
        let raw = load_str(r#"{"services": {"zeta": {}, "alpha": {}}}"#, SourceFormat::Json)
            .expect("load");
        let services = raw.get("services").as_mapping().expect("mapping");
        assert_eq!(services.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn yaml_syntax_error_is_load_error() {
        let err = load_str("services: [unclosed", SourceFormat::Yaml).unwrap_err();
        assert!(matches!(err, ComposeError::Load { format: SourceFormat::Yaml, .. }));
    }

    #[test]
    fn json_syntax_error_is_load_error() {
        let err = load_str("{", SourceFormat::Json).unwrap_err();
        assert!(matches!(err, ComposeError::Load { format: SourceFormat::Json, .. }));
    }

    #[test]
    fn empty_yaml_is_null() {
        assert!(load_str("", SourceFormat::Yaml).expect("load").is_null());
    }

    #[test]
    fn load_file_detects_json() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("tempfile");
        file.write_all(br#"{"version": "3.9"}"#).expect("write");
        let raw = load_file(file.path()).expect("load");
        assert_eq!(raw.get("version"), &RawValue::from("3.9"));
    }

    #[test]
    fn load_file_missing_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_file(&dir.path().join("compose.yaml")).unwrap_err();
        assert!(matches!(err, ComposeError::Io { .. }), "got: {err}");
    }
}
