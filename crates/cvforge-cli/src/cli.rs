//! Argument parsing for `cvforge-sitemap`.
//!
//! The binary is a single-shot build step, so the surface is a handful of
//! flags rather than subcommands. The one required setting — the absolute
//! site base URL — can come from `--base-url` or the `SITE_BASE_URL`
//! environment variable; resolution and validation happen in
//! `cvforge_core::config` so the error taxonomy stays in one place.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Generate the marketing-site sitemap from the curated registries.
#[derive(Debug, Clone, Parser)]
#[command(name = "cvforge-sitemap", version, about)]
pub struct Cli {
    /// Absolute base URL prefixed onto every path (e.g. <https://cvforge.io>)
    #[arg(long, env = "SITE_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Primary output path; failure to write it aborts the build
    #[arg(long, default_value = "public/sitemap.xml", value_name = "PATH")]
    pub out: PathBuf,

    /// Additional best-effort output paths (skipped with a warning when
    /// unreachable)
    #[arg(long = "publish", default_value = "out/sitemap.xml", value_name = "PATH")]
    pub publish: Vec<PathBuf>,

    /// Print the rendered XML to stdout instead of writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Print URL counts per source and exit without rendering
    #[arg(long)]
    pub stats: bool,

    /// Output format for --stats
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format for machine-facing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output (default)
    Text,
    /// Machine-readable JSON
    Json,
}
