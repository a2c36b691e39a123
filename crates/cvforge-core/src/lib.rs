//! # cvforge-core
//!
//! Core functionality for the cvforge marketing site's sitemap pipeline.
//!
//! This crate derives a canonical, deduplicated, regionally-annotated URL
//! set from the site's curated data registries and renders it into sitemap
//! XML. It is designed as a single-shot build step: registries are constant
//! in-process data, aggregation and rendering are pure, and the only I/O is
//! a handful of small file writes at the very end.
//!
//! ## Architecture
//!
//! The pipeline has four data sources and two consumers:
//!
//! - **Registries**: the static page list, the job keyword database, the
//!   job examples database, and the regional pairing table
//! - **Aggregation**: [`SiteUrls`] merges the sources into one ordered,
//!   immutable URL set, resolving lastmod defaults exactly once
//! - **Hreflang**: [`HreflangIndex`] answers O(1) pair lookups and produces
//!   the alternate-link annotation set for paired pages
//! - **Emission**: [`sitemap::render`] produces the XML document,
//!   [`output::write_outputs`] persists it atomically
//!
//! ## Quick Start
//!
//! ```rust
//! use cvforge_core::{HreflangIndex, JobRegistry, PageRegistry, SiteUrls};
//!
//! let urls = SiteUrls::build(
//!     &PageRegistry::new(),
//!     &JobRegistry::keywords(),
//!     &JobRegistry::examples(),
//!     chrono::Utc::now().date_naive(),
//! );
//!
//! let xml = cvforge_core::sitemap::render(&urls, &HreflangIndex::new(), "https://cvforge.io");
//! assert!(xml.starts_with("<?xml"));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`]. Registry data problems
//! (duplicate slugs, malformed paths) are deliberately *not* runtime errors:
//! they are data-authoring bugs caught by the consistency test suite, and
//! the generator treats its inputs as already validated.

/// URL aggregation across the data registries
pub mod aggregate;
/// Build configuration resolution
pub mod config;
/// Error types and result aliases
pub mod error;
/// Regional page pairing and hreflang annotation
pub mod hreflang;
/// Sitemap output writing
pub mod output;
/// Curated data registries
pub mod registry;
/// Sitemap XML rendering
pub mod sitemap;
/// Core data types and structures
pub mod types;
/// Structural validation predicates for the test suite
pub mod validate;

// Re-export commonly used types
pub use aggregate::SiteUrls;
pub use config::{resolve_base_url, BuildConfig, BASE_URL_ENV};
pub use error::{Error, Result};
pub use hreflang::{HreflangIndex, CV_REGIONS, DEFAULT_REGION, RESUME_REGION};
pub use registry::{JobRegistry, PageRegistry};
pub use types::*;
