//! CLI command definitions and dispatch.

pub mod audit;
pub mod normalize;

use clap::{Parser, Subcommand};

/// composenorm — Canonical records from Docker Compose files.
#[derive(Parser, Debug)]
#[command(name = "composenorm", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a compose file and print the canonical record.
    Normalize(normalize::NormalizeArgs),
    /// Report ghost networks and default-network usage.
    Audit(audit::AuditArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Normalize(args) => normalize::execute(args),
        Command::Audit(args) => audit::execute(args),
    }
}
