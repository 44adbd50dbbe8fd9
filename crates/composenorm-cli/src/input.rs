//! Input selection shared by all commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use composenorm_common::config::NormalizerConfig;
use composenorm_common::constants::{DEFAULT_COMPOSE_FILES, STDIN_PATH};
use composenorm_common::types::SourceFormat;
use composenorm_core::RawValue;
use composenorm_core::loader;

/// Where to read the compose document from and how to interpret it.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Compose file to read; `-` reads stdin. Defaults to the first of
    /// compose.yaml, compose.yml, docker-compose.yml, docker-compose.yaml.
    pub file: Option<PathBuf>,

    /// Input format; detected from the file extension when omitted.
    #[arg(long)]
    pub source_format: Option<SourceFormat>,

    /// Version to report when the document declares none.
    #[arg(long, env = "COMPOSENORM_DEFAULT_VERSION")]
    pub default_version: Option<String>,
}

/// A loaded document and a label describing where it came from.
#[derive(Debug)]
pub struct LoadedInput {
    /// Display name of the source (path or `<stdin>`).
    pub label: String,
    /// The raw tree.
    pub root: RawValue,
}

impl InputArgs {
    /// Reads and parses the selected input.
    ///
    /// # Errors
    ///
    /// Returns an error if no input can be found, read, or parsed.
    pub fn load(&self) -> anyhow::Result<LoadedInput> {
        match self.file.as_deref() {
            Some(path) if path == Path::new(STDIN_PATH) => {
                let mut text = String::new();
                let _ = std::io::stdin()
                    .read_to_string(&mut text)
                    .context("cannot read standard input")?;
                let format = self.source_format.unwrap_or_default();
                let root = loader::load_str(&text, format)?;
                Ok(LoadedInput {
                    label: "<stdin>".into(),
                    root,
                })
            }
            explicit => {
                let path = match explicit {
                    Some(path) => path.to_path_buf(),
                    None => find_default_file(Path::new("."))?,
                };
                self.load_path(&path)
            }
        }
    }

    fn load_path(&self, path: &Path) -> anyhow::Result<LoadedInput> {
        tracing::info!(path = %path.display(), "reading compose file");
        if !path.exists() {
            anyhow::bail!("file not found: {}", path.display());
        }
        let root = match self.source_format {
            Some(format) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read {}", path.display()))?;
                loader::load_str(&text, format)?
            }
            None => loader::load_file(path)?,
        };
        Ok(LoadedInput {
            label: path.display().to_string(),
            root,
        })
    }

    /// Builds the normalizer configuration from flags and environment.
    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig {
            default_version: self.default_version.clone(),
        }
    }
}

/// Returns the first conventional compose file name present in `dir`.
fn find_default_file(dir: &Path) -> anyhow::Result<PathBuf> {
    DEFAULT_COMPOSE_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .with_context(|| {
            format!(
                "no compose file given and none of {} found",
                DEFAULT_COMPOSE_FILES.join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: Option<PathBuf>, source_format: Option<SourceFormat>) -> InputArgs {
        InputArgs {
            file,
            source_format,
            default_version: None,
        }
    }

    #[test]
    fn finds_default_file_in_priority_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("docker-compose.yml"), "services: {}\n").expect("write");
        std::fs::write(dir.path().join("compose.yml"), "services: {}\n").expect("write");

        let found = find_default_file(dir.path()).expect("found");
        assert_eq!(found, dir.path().join("compose.yml"));
    }

    #[test]
    fn missing_default_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = find_default_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("compose.yaml"), "got: {err}");
    }

    #[test]
    fn loads_explicit_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("stack.yml");
        std::fs::write(&path, "services:\n  web:\n    image: nginx\n").expect("write");

        let loaded = args(Some(path.clone()), None).load().expect("load");
        assert_eq!(loaded.label, path.display().to_string());
        assert_eq!(
            loaded.root.get("services").get("web").get("image"),
            &RawValue::from("nginx")
        );
    }

    #[test]
    fn source_format_overrides_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("stack.txt");
        std::fs::write(&path, r#"{"services": {}}"#).expect("write");

        let loaded = args(Some(path), Some(SourceFormat::Json)).load().expect("load");
        assert!(loaded.root.get("services").as_mapping().is_some());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = args(Some(dir.path().join("nope.yml")), None).load().unwrap_err();
        assert!(err.to_string().contains("file not found"), "got: {err}");
    }

    #[test]
    fn config_carries_default_version() {
        let mut input = args(None, None);
        input.default_version = Some("3.8".into());
        assert_eq!(input.normalizer_config().default_version.as_deref(), Some("3.8"));
    }
}
