//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "formwork",
    bin_name = "formwork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant project scaffolding from the bundled template",
    long_about = "Formwork materializes the bundled project template tree \
                  into a target directory, skipping transient paths and \
                  refusing to clobber existing content unless forced.",
    after_help = "EXAMPLES:\n\
        \x20 formwork my-service      # create ./my-service from the template\n\
        \x20 formwork .               # scaffold into the current directory\n\
        \x20 formwork . --force       # ... overwriting colliding files\n\
        \x20 formwork out --dry-run   # preview without writing anything\n\
        \x20 formwork --completions bash > /usr/share/bash-completion/completions/formwork",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Target directory to scaffold into.  A name creates `./name`; `.`
    /// scaffolds into the current working directory.
    #[arg(
        value_name = "TARGET",
        required_unless_present = "completions",
        help = "Target directory ('.' for the current directory)"
    )]
    pub target: Option<String>,

    /// Overwrite colliding files in a non-empty destination (destructive).
    #[arg(long = "force", help = "Overwrite colliding files in the destination")]
    pub force: bool,

    /// Preview the copy plan without writing any files.
    #[arg(long = "dry-run", help = "Show what would be copied without copying")]
    pub dry_run: bool,

    /// Override the bundled template root.
    ///
    /// Intended for testing and development; the `FORMWORK_TEMPLATE_DIR`
    /// environment variable is the equivalent non-flag override.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Use DIR as the template root instead of the bundled one"
    )]
    pub template_dir: Option<PathBuf>,

    /// Generate shell completion scripts and exit.
    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
