use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "objview", version, about = "Inspect ledger object records")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Default log level when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,

    /// Emit log lines on stderr as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the view model of an object record or query response.
    Inspect {
        /// JSON file path, or `-` for stdin.
        input: String,

        /// Object id (required for a bare record, overrides the response's).
        #[arg(long)]
        object_id: Option<String>,

        /// Object version (required for a bare record, overrides the response's).
        #[arg(long)]
        version: Option<String>,

        /// Engine config JSON file.
        #[arg(long)]
        config: Option<String>,

        /// Render byte-array owners as hex instead of ASCII.
        #[arg(long)]
        hex_owner: bool,

        /// Report reference-like fields without a reference shape.
        #[arg(long)]
        surface_unresolved: bool,
    },

    /// Decode a raw owner value (JSON, or a bare string).
    Owner {
        raw: String,

        #[arg(long)]
        hex: bool,
    },

    /// Normalize a fully-qualified type string.
    TypeLabel {
        type_string: String,

        /// Prefix to strip (default: 0x2::).
        #[arg(long)]
        prefix: Option<String>,
    },
}
