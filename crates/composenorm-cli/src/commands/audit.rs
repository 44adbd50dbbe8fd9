//! `composenorm audit` — Report network isolation facts for a compose file.

use anyhow::Context;
use clap::Args;

use crate::input::InputArgs;
use crate::output;

/// Arguments for the `audit` command.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Fail when any service references an undeclared network.
    #[arg(long)]
    pub strict: bool,
}

/// Executes the `audit` command.
///
/// # Errors
///
/// Returns an error if the input cannot be normalized, or in strict mode
/// when ghost networks are present.
pub fn execute(args: AuditArgs) -> anyhow::Result<()> {
    let loaded = args.input.load()?;
    let document =
        composenorm_core::normalize_with(&loaded.root, &args.input.normalizer_config())
            .with_context(|| format!("cannot normalize {}", loaded.label))?;

    print!("{}", output::render_audit(&document, &loaded.label));

    if args.strict && !document.ghost_networks().is_empty() {
        anyhow::bail!(
            "{} undeclared network(s) referenced: {}",
            document.ghost_networks().len(),
            document.ghost_networks().join(", ")
        );
    }

    Ok(())
}
