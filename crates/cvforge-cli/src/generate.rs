//! Sitemap generation — the default execution path.

use anyhow::{Context, Result};
use chrono::Utc;
use cvforge_core::{
    output, resolve_base_url, sitemap, BuildConfig, HreflangIndex, JobRegistry, PageRegistry,
    SiteUrls,
};
use tracing::debug;

use crate::cli::Cli;

/// Build the aggregate, render the document, and write the outputs.
///
/// Configuration is resolved before anything else so a missing base URL
/// aborts the build without touching any destination.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = BuildConfig {
        base_url: resolve_base_url(cli.base_url.as_deref())?,
        out: cli.out.clone(),
        publish: cli.publish.clone(),
    };

    let urls = SiteUrls::build(
        &PageRegistry::new(),
        &JobRegistry::keywords(),
        &JobRegistry::examples(),
        Utc::now().date_naive(),
    );
    let hreflang = HreflangIndex::new();
    debug!(
        urls = urls.len(),
        pairs = hreflang.len(),
        base_url = %config.base_url,
        "Rendering sitemap"
    );

    let xml = sitemap::render(&urls, &hreflang, &config.base_url);

    if cli.dry_run {
        print!("{xml}");
        return Ok(());
    }

    let written = output::write_outputs(&xml, &config.out, &config.publish)
        .context("Failed to write sitemap")?;

    println!(
        "✓ Generated sitemap with {} URLs ({} hreflang pairs) to {}",
        urls.len(),
        hreflang.len(),
        written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
