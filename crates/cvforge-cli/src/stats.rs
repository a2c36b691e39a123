//! URL count reporting for the `--stats` mode.

use anyhow::Result;
use chrono::Utc;
use cvforge_core::{HreflangIndex, JobRegistry, PageRegistry, SiteUrls};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Per-source URL counts for one build of the aggregate.
#[derive(Debug, Serialize)]
struct SiteStats {
    static_pages: usize,
    keyword_pages: usize,
    example_pages: usize,
    hreflang_pairs: usize,
    total_urls: usize,
}

/// Print the aggregate's per-source URL counts.
pub fn execute(format: OutputFormat) -> Result<()> {
    let urls = SiteUrls::build(
        &PageRegistry::new(),
        &JobRegistry::keywords(),
        &JobRegistry::examples(),
        Utc::now().date_naive(),
    );
    let hreflang = HreflangIndex::new();

    let stats = SiteStats {
        static_pages: urls.static_count(),
        keyword_pages: urls.keyword_count(),
        example_pages: urls.example_count(),
        hreflang_pairs: hreflang.len(),
        total_urls: urls.len(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => {
            println!("static pages    {:>5}", stats.static_pages);
            println!("keyword pages   {:>5}", stats.keyword_pages);
            println!("example pages   {:>5}", stats.example_pages);
            println!("hreflang pairs  {:>5}", stats.hreflang_pairs);
            println!("total URLs      {:>5}", stats.total_urls);
        },
    }

    Ok(())
}
