//! Regional page pairing and hreflang annotation.
//!
//! The product ships US-terminology ("resume") pages and UK/AU/NZ-terminology
//! ("CV") pages covering the same content. Each such pair is annotated in the
//! sitemap with `xhtml:link rel="alternate"` entries so search engines serve
//! the right regional variant. The pairing table only annotates pages that
//! already exist in the static page registry; it never introduces new ones.
//!
//! Lookups are O(1): the index is built once from the pairing table, keyed by
//! both sides of every pair, and never mutated afterwards.

use std::collections::HashMap;

use crate::types::{Annotation, HreflangPair};

/// Region tags whose audiences use CV terminology.
pub const CV_REGIONS: [&str; 3] = ["en-GB", "en-AU", "en-NZ"];

/// The canonical resume-terminology region tag.
pub const RESUME_REGION: &str = "en-US";

/// The fallback region tag for unmatched locales.
pub const DEFAULT_REGION: &str = "x-default";

/// Path-keyed lookup over the regional pairing table.
pub struct HreflangIndex {
    pairs: Vec<HreflangPair>,
    by_path: HashMap<String, usize>,
}

impl HreflangIndex {
    /// Create the index over the curated pairing table.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pairs(vec![
            HreflangPair::new("/resume-builder", "/cv-builder"),
            HreflangPair::new("/templates", "/cv-templates"),
            HreflangPair::new("/resume-examples", "/cv-examples"),
        ])
    }

    /// Build an index from an explicit pairing table (used by tests).
    #[must_use]
    pub fn from_pairs(pairs: Vec<HreflangPair>) -> Self {
        let mut by_path = HashMap::with_capacity(pairs.len() * 2);
        for (idx, pair) in pairs.iter().enumerate() {
            by_path.insert(pair.resume_path.clone(), idx);
            by_path.insert(pair.cv_path.clone(), idx);
        }
        Self { pairs, by_path }
    }

    /// The pair the given path participates in, if any.
    ///
    /// Matches either side. Paths unknown to the index are not an error —
    /// the index has no opinion on whether a path is otherwise valid.
    #[must_use]
    pub fn find_pair(&self, path: &str) -> Option<&HreflangPair> {
        self.by_path.get(path).map(|&idx| &self.pairs[idx])
    }

    /// Whether the path is the CV side of a pair.
    #[must_use]
    pub fn is_cv_page(&self, path: &str) -> bool {
        self.find_pair(path).is_some_and(|p| p.cv_path == path)
    }

    /// Whether the path is the resume side of a pair.
    #[must_use]
    pub fn is_resume_page(&self, path: &str) -> bool {
        self.find_pair(path).is_some_and(|p| p.resume_path == path)
    }

    /// The CV side of every pair, in table order.
    #[must_use]
    pub fn cv_paths(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.cv_path.as_str()).collect()
    }

    /// The resume side of every pair, in table order.
    #[must_use]
    pub fn resume_paths(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.resume_path.as_str()).collect()
    }

    /// The full alternate-link annotation set for a path.
    ///
    /// Both pages of a pair end up offering links for every supported
    /// region, and both agree on the targets: CV region tags point at the CV
    /// path, the resume-region and default tags point at the resume path.
    /// Unpaired paths get an empty set.
    #[must_use]
    pub fn annotations_for(&self, path: &str) -> Vec<Annotation> {
        let Some(pair) = self.find_pair(path) else {
            return Vec::new();
        };

        let mut annotations = Vec::with_capacity(CV_REGIONS.len() + 2);
        for region in CV_REGIONS {
            annotations.push(Annotation {
                region,
                target_path: pair.cv_path.clone(),
            });
        }
        annotations.push(Annotation {
            region: RESUME_REGION,
            target_path: pair.resume_path.clone(),
        });
        annotations.push(Annotation {
            region: DEFAULT_REGION,
            target_path: pair.resume_path.clone(),
        });
        annotations
    }

    /// The underlying pairing table, in order.
    #[must_use]
    pub fn pairs(&self) -> &[HreflangPair] {
        &self.pairs
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for HreflangIndex {
    fn default() -> Self {
        Self::new()
    }
}
