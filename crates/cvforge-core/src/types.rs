//! Core data types for the sitemap pipeline.
//!
//! Everything here is read-only build-time data: records are constructed
//! once from the curated registries, aggregated, rendered, and discarded.
//! Nothing is mutated after construction and nothing is persisted beyond
//! the generated XML.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Path prefix for pages derived from the job keyword registry.
pub const KEYWORD_PATH_PREFIX: &str = "/resume-keywords";

/// Path prefix for pages derived from the job examples registry.
pub const EXAMPLE_PATH_PREFIX: &str = "/examples";

/// Change frequency hints emitted into the sitemap.
///
/// Search engines treat these as hints rather than guarantees; the curated
/// registries only use the four values below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    Weekly,
    /// The page changes monthly.
    Monthly,
    /// The page changes yearly.
    Yearly,
}

impl ChangeFrequency {
    /// The lowercase token rendered into `<changefreq>`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(Error::Config(format!("Invalid changefreq value: {s}"))),
        }
    }
}

/// One entry in the generated sitemap.
///
/// `path` is site-relative (`/templates`, not a full URL); the emitter joins
/// it with the configured base URL at render time. Path uniqueness across
/// the whole aggregate is a validated invariant, not something this type
/// enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Absolute site-relative path, starting with `/`.
    pub path: String,
    /// Relative crawl priority, in `[0.0, 1.0]`.
    pub priority: f32,
    /// How frequently the page changes.
    pub changefreq: ChangeFrequency,
    /// Last modification date (calendar date, not a timestamp).
    pub lastmod: NaiveDate,
}

impl UrlRecord {
    /// Create a record for a hand-maintained page.
    #[must_use]
    pub fn new(path: &str, priority: f32, changefreq: ChangeFrequency, lastmod: NaiveDate) -> Self {
        Self {
            path: path.to_string(),
            priority,
            changefreq,
            lastmod,
        }
    }
}

/// One programmatic-SEO subject: a job title with curated metadata.
///
/// Used by both the keyword registry (`/resume-keywords/{slug}`) and the
/// examples registry (`/examples/{slug}`); the examples variant simply
/// carries no keywords. The derived [`UrlRecord`] is produced at aggregation
/// time and never stored redundantly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Display title, e.g. `"Software Engineer"`.
    pub title: String,
    /// URL-safe identifier, lowercase hyphen-delimited, unique per registry.
    pub slug: String,
    /// Relative crawl priority for the derived page, in `(0.0, 1.0]`.
    pub priority: f32,
    /// Last curation date; pages without one fall back to the build date.
    pub lastmod: Option<NaiveDate>,
    /// Curated ATS keywords for the keyword variant; empty for examples.
    pub keywords: Vec<String>,
}

impl JobRecord {
    /// Create a job record with no explicit lastmod and no keywords.
    #[must_use]
    pub fn new(title: &str, slug: &str, priority: f32) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            priority,
            lastmod: None,
            keywords: Vec::new(),
        }
    }

    /// Set the last curation date.
    #[must_use]
    pub fn with_lastmod(mut self, lastmod: NaiveDate) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    /// Attach the curated keyword list.
    #[must_use]
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| (*k).to_string()).collect();
        self
    }
}

/// Two static pages that are regional variants of the same content.
///
/// A pair never introduces a new page; both sides must already exist in the
/// static page registry. Each page belongs to at most one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HreflangPair {
    /// The US-terminology ("resume") side of the pair.
    pub resume_path: String,
    /// The UK/AU/NZ-terminology ("CV") side of the pair.
    pub cv_path: String,
}

impl HreflangPair {
    /// Create a pair from its two sides.
    #[must_use]
    pub fn new(resume_path: &str, cv_path: &str) -> Self {
        Self {
            resume_path: resume_path.to_string(),
            cv_path: cv_path.to_string(),
        }
    }
}

/// One alternate-language annotation on a sitemap entry.
///
/// Rendered as `<xhtml:link rel="alternate" hreflang="{region}" href="{base}{target_path}"/>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// BCP 47 region tag (`en-GB`, `en-US`, …) or `x-default`.
    pub region: &'static str,
    /// Site-relative path of the regional variant the tag points at.
    pub target_path: String,
}
