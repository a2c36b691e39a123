//! URL aggregation across the data registries.
//!
//! [`SiteUrls`] is the single aggregate the emitter and the consistency
//! suite work from: built once per build invocation, immutable afterwards,
//! and passed by reference — there is no hidden module-level state.
//!
//! Aggregation is pure and performs no validation: a malformed or duplicate
//! record is a data-authoring error caught by the test suite, not something
//! corrected here. `all_paths` in particular concatenates without
//! deduplicating, so a cross-registry collision stays visible.

use chrono::NaiveDate;

use crate::registry::{JobRegistry, PageRegistry};
use crate::types::{ChangeFrequency, JobRecord, UrlRecord, EXAMPLE_PATH_PREFIX, KEYWORD_PATH_PREFIX};

/// The aggregated, ordered URL set for one build.
pub struct SiteUrls {
    static_records: Vec<UrlRecord>,
    keyword_records: Vec<UrlRecord>,
    example_records: Vec<UrlRecord>,
}

impl SiteUrls {
    /// Aggregate the three registries into one ordered URL set.
    ///
    /// Job records without an explicit lastmod fall back to `build_date`;
    /// the default is resolved here, exactly once, so every later consumer
    /// sees the same dates.
    #[must_use]
    pub fn build(
        pages: &PageRegistry,
        keywords: &JobRegistry,
        examples: &JobRegistry,
        build_date: NaiveDate,
    ) -> Self {
        Self {
            static_records: pages.entries().to_vec(),
            keyword_records: derive(keywords.entries(), KEYWORD_PATH_PREFIX, build_date),
            example_records: derive(examples.entries(), EXAMPLE_PATH_PREFIX, build_date),
        }
    }

    /// Paths from the static page registry, in registry order.
    #[must_use]
    pub fn static_paths(&self) -> Vec<&str> {
        self.static_records.iter().map(|r| r.path.as_str()).collect()
    }

    /// Derived `/resume-keywords/{slug}` paths, in registry order.
    #[must_use]
    pub fn job_keyword_paths(&self) -> Vec<&str> {
        self.keyword_records.iter().map(|r| r.path.as_str()).collect()
    }

    /// Derived `/examples/{slug}` paths, in registry order.
    #[must_use]
    pub fn job_example_paths(&self) -> Vec<&str> {
        self.example_records.iter().map(|r| r.path.as_str()).collect()
    }

    /// Every path, static then keywords then examples, with no reordering
    /// and no deduplication.
    #[must_use]
    pub fn all_paths(&self) -> Vec<&str> {
        self.records().map(|r| r.path.as_str()).collect()
    }

    /// Every record, in the same order as [`SiteUrls::all_paths`].
    pub fn records(&self) -> impl Iterator<Item = &UrlRecord> {
        self.static_records
            .iter()
            .chain(&self.keyword_records)
            .chain(&self.example_records)
    }

    /// Number of static records.
    #[must_use]
    pub fn static_count(&self) -> usize {
        self.static_records.len()
    }

    /// Number of keyword-derived records.
    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.keyword_records.len()
    }

    /// Number of example-derived records.
    #[must_use]
    pub fn example_count(&self) -> usize {
        self.example_records.len()
    }

    /// Total number of records across all sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.static_count() + self.keyword_count() + self.example_count()
    }

    /// Whether the aggregate holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive one `UrlRecord` per job record under the given path prefix.
fn derive(jobs: &[JobRecord], prefix: &str, build_date: NaiveDate) -> Vec<UrlRecord> {
    jobs.iter()
        .map(|job| UrlRecord {
            path: format!("{prefix}/{}", job.slug),
            priority: job.priority,
            changefreq: ChangeFrequency::Monthly,
            lastmod: job.lastmod.unwrap_or(build_date),
        })
        .collect()
}
