//! Registry of hand-maintained marketing and content pages.

use crate::types::{ChangeFrequency, UrlRecord};

use super::date;

/// Registry of the fixed, hand-maintained pages that appear in the sitemap.
///
/// Order matters: the aggregator preserves registry order, so entries are
/// listed roughly by crawl importance. Regional variants (`/cv-*`) sit next
/// to their resume-terminology counterparts; the pairing itself lives in the
/// hreflang table.
pub struct PageRegistry {
    entries: Vec<UrlRecord>,
}

impl PageRegistry {
    /// Create the registry with the curated page list.
    #[must_use]
    pub fn new() -> Self {
        use ChangeFrequency::{Daily, Monthly, Weekly, Yearly};

        let entries = vec![
            UrlRecord::new("/", 1.0, Weekly, date(2026, 7, 20)),
            UrlRecord::new("/resume-builder", 0.9, Weekly, date(2026, 7, 20)),
            UrlRecord::new("/cv-builder", 0.9, Weekly, date(2026, 7, 20)),
            UrlRecord::new("/templates", 0.9, Weekly, date(2026, 7, 14)),
            UrlRecord::new("/cv-templates", 0.9, Weekly, date(2026, 7, 14)),
            UrlRecord::new("/resume-examples", 0.8, Weekly, date(2026, 7, 8)),
            UrlRecord::new("/cv-examples", 0.8, Weekly, date(2026, 7, 8)),
            UrlRecord::new("/resume-keywords", 0.8, Weekly, date(2026, 7, 8)),
            UrlRecord::new("/cover-letter-builder", 0.8, Weekly, date(2026, 6, 30)),
            UrlRecord::new("/ats-resume-checker", 0.8, Weekly, date(2026, 6, 30)),
            UrlRecord::new("/pricing", 0.8, Monthly, date(2026, 6, 2)),
            UrlRecord::new("/blog", 0.7, Daily, date(2026, 7, 28)),
            UrlRecord::new("/blog/how-to-beat-the-ats", 0.6, Monthly, date(2026, 5, 18)),
            UrlRecord::new(
                "/blog/resume-keywords-that-matter",
                0.6,
                Monthly,
                date(2026, 6, 9),
            ),
            UrlRecord::new("/blog/cv-vs-resume", 0.6, Monthly, date(2026, 4, 22)),
            UrlRecord::new("/faq", 0.6, Monthly, date(2026, 5, 5)),
            UrlRecord::new("/about", 0.5, Yearly, date(2026, 1, 15)),
            UrlRecord::new("/contact", 0.5, Yearly, date(2026, 1, 15)),
            UrlRecord::new("/privacy-policy", 0.3, Yearly, date(2026, 2, 1)),
            UrlRecord::new("/terms-of-service", 0.3, Yearly, date(2026, 2, 1)),
        ];

        Self { entries }
    }

    /// Build a registry from explicit entries (used by tests and tooling).
    #[must_use]
    pub fn from_entries(entries: Vec<UrlRecord>) -> Self {
        Self { entries }
    }

    /// All entries, in registry order.
    #[must_use]
    pub fn entries(&self) -> &[UrlRecord] {
        &self.entries
    }

    /// The paths of all entries, in registry order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Whether a page with the given path exists in the registry.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::validate::is_valid_path;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_not_empty() {
        let registry = PageRegistry::new();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), registry.entries().len());
    }

    #[test]
    fn test_paths_are_unique() {
        let registry = PageRegistry::new();

        let mut seen = HashSet::new();
        for entry in registry.entries() {
            assert!(
                seen.insert(&entry.path),
                "Duplicate path found: {}",
                entry.path
            );
        }
    }

    #[test]
    fn test_paths_are_well_formed() {
        let registry = PageRegistry::new();

        for entry in registry.entries() {
            assert!(
                is_valid_path(&entry.path),
                "Malformed path in registry: {}",
                entry.path
            );
        }
    }

    #[test]
    fn test_priorities_are_in_bounds() {
        let registry = PageRegistry::new();

        for entry in registry.entries() {
            assert!(
                (0.0..=1.0).contains(&entry.priority),
                "Priority out of bounds for {}: {}",
                entry.path,
                entry.priority
            );
        }
    }

    #[test]
    fn test_root_page_is_listed_first() {
        let registry = PageRegistry::new();
        assert_eq!(registry.entries()[0].path, "/");
        assert_eq!(registry.entries()[0].priority, 1.0);
    }

    #[test]
    fn test_contains_lookup() {
        let registry = PageRegistry::new();
        assert!(registry.contains("/templates"));
        assert!(registry.contains("/cv-templates"));
        assert!(!registry.contains("/no-such-page"));
    }

    #[test]
    fn test_paths_view_preserves_order() {
        let registry = PageRegistry::new();
        let paths = registry.paths();

        assert_eq!(paths.len(), registry.len());
        for (path, entry) in paths.iter().zip(registry.entries()) {
            assert_eq!(path, &entry.path);
        }
    }
}
