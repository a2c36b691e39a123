//! cvforge-sitemap - build-time sitemap generator for the marketing site.
//!
//! Derives the full URL set from the curated registries (static pages, job
//! keyword database, job examples database), annotates regional page pairs
//! with hreflang alternate links, and writes sitemap XML to the configured
//! destinations. Runs once per build; a missing or invalid base URL aborts
//! with a non-zero exit before any file is touched.

use anyhow::Result;
use clap::Parser;

mod cli;
mod generate;
mod logging;
mod stats;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::initialize_logging(&cli)?;

    if cli.stats {
        stats::execute(cli.format)
    } else {
        generate::execute(&cli)
    }
}
