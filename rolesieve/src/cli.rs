// rolesieve/src/cli.rs
//! This file defines the command-line interface (CLI) for the rolesieve application.
//! License: MIT OR Apache-2.0

use clap::{Parser, ValueEnum};
use rolesieve_core::PassSet;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rolesieve",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build role-based resumes from LaTeX source",
    long_about = "rolesieve reads every LaTeX file in a source directory, removes the content tagged for other roles, and writes one filtered copy of the tree per role, together with the layout style file and a small role definition file.",
)]
pub struct Cli {
    /// Source directory containing the LaTeX files.
    #[arg(long = "source-dir", value_name = "DIR", default_value = "tex-files", help = "Source directory containing LaTeX files.")]
    pub source_dir: PathBuf,

    /// Output directory for the processed files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "build", help = "Output directory for processed files.")]
    pub output_dir: PathBuf,

    /// Roles to build (defaults to the configured roles: qr qd tech soleng).
    #[arg(long = "roles", value_name = "ROLE", num_args = 1.., value_delimiter = ',', help = "List of roles to build (default: qr qd tech soleng).")]
    pub roles: Option<Vec<String>>,

    /// Build a single role, written straight into the output directory.
    #[arg(long = "role", value_name = "ROLE", help = "Build for a specific role only; it must be one of the configured roles.")]
    pub role: Option<String>,

    /// Sets the include-location flag in the role definition file.
    #[arg(long = "include-location", help = "Include location in header.")]
    pub include_location: bool,

    /// Path to a YAML build configuration.
    #[arg(long = "config", value_name = "FILE", env = "ROLESIEVE_CONFIG", help = "Path to a YAML build configuration file.")]
    pub config: Option<PathBuf>,

    /// Select which filtering passes run.
    #[arg(long = "passes", value_name = "PASSES", value_enum, default_value = "full", help = "Select the filtering passes ('full' or 'simple').")]
    pub passes: PassChoice,

    /// Disable informational messages
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

/// Enum for selecting the filtering passes.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PassChoice {
    /// Exclude markers, multi-line inline regions and wrapper cleanup on top of block and inline regions.
    Full,
    /// Block regions and single-line inline regions only.
    Simple,
}

impl From<PassChoice> for PassSet {
    fn from(choice: PassChoice) -> Self {
        match choice {
            PassChoice::Full => PassSet::full(),
            PassChoice::Simple => PassSet::simple(),
        }
    }
}
