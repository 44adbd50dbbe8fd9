//! `composenorm normalize` — Print the canonical record of a compose file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::input::InputArgs;
use crate::output::{self, OutputFormat};

/// Arguments for the `normalize` command.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, env = "COMPOSENORM_FORMAT")]
    pub format: OutputFormat,

    /// Emit single-line JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the `normalize` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, its root is not
/// a mapping, or the output cannot be written.
pub fn execute(args: NormalizeArgs) -> anyhow::Result<()> {
    let loaded = args.input.load()?;
    let document =
        composenorm_core::normalize_with(&loaded.root, &args.input.normalizer_config())
            .with_context(|| format!("cannot normalize {}", loaded.label))?;

    let rendered = output::render_document(&document, args.format, !args.compact)?;

    if let Some(ref out_path) = args.output {
        std::fs::write(out_path, &rendered)
            .with_context(|| format!("cannot write {}", out_path.display()))?;
        tracing::info!(path = %out_path.display(), "wrote normalized document");
    } else {
        print!("{rendered}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_args(file: PathBuf, format: OutputFormat, output: PathBuf) -> NormalizeArgs {
        NormalizeArgs {
            input: InputArgs {
                file: Some(file),
                source_format: None,
                default_version: Some("3.8".into()),
            },
            format,
            compact: false,
            output: Some(output),
        }
    }

    #[test]
    fn writes_json_record_to_output_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("compose.yml");
        let output = dir.path().join("normalized.json");
        std::fs::write(
            &input,
            "services:\n  web:\n    image: nginx\n    ports: [80]\n    networks: [edge]\n",
        )
        .expect("write");

        execute(normalize_args(input, OutputFormat::Json, output.clone())).expect("normalize");

        let text = std::fs::read_to_string(&output).expect("read output");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["meta"]["version"], "3.8");
        assert_eq!(value["meta"]["ghost_networks"], serde_json::json!(["edge"]));
        assert_eq!(value["services"]["web"]["image"], "nginx");
        assert_eq!(value["services"]["web"]["ports"], serde_json::json!(["80"]));
    }

    #[test]
    fn writes_yaml_record_to_output_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("compose.yml");
        let output = dir.path().join("normalized.yml");
        std::fs::write(&input, "services:\n  db:\n    network_mode: host\n").expect("write");

        execute(normalize_args(input, OutputFormat::Yaml, output.clone())).expect("normalize");

        let text = std::fs::read_to_string(&output).expect("read output");
        let value: serde_yaml::Value = serde_yaml::from_str(&text).expect("yaml");
        assert_eq!(value["services"]["db"]["network_mode"], "host");
        assert_eq!(value["meta"]["using_default_network"], false);
    }

    #[test]
    fn missing_input_fails_without_writing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("out.json");
        let result = execute(normalize_args(
            dir.path().join("absent.yml"),
            OutputFormat::Json,
            output.clone(),
        ));
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
