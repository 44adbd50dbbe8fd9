//! System-wide constants and default file names.

/// File names tried, in order, when no input path is given.
pub const DEFAULT_COMPOSE_FILES: [&str; 4] = [
    "compose.yaml",
    "compose.yml",
    "docker-compose.yml",
    "docker-compose.yaml",
];

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Top-level key holding service definitions.
pub const SERVICES_KEY: &str = "services";
/// Top-level key holding network declarations.
pub const NETWORKS_KEY: &str = "networks";
/// Top-level key holding volume declarations.
pub const VOLUMES_KEY: &str = "volumes";
/// Top-level key holding the file format version.
pub const VERSION_KEY: &str = "version";
