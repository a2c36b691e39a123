//! Structural validation predicates for registry data.
//!
//! The generator itself never validates its inputs at runtime — these
//! predicates exist for the consistency test battery, which sweeps the
//! curated registries and the rendered document for data-authoring errors.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Whether a slug is a lowercase hyphen-delimited token.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Whether a path is an absolute site-relative path.
///
/// Must start with `/`, must not end with `/` unless it is the root path
/// itself, and must not carry a query string or fragment.
#[must_use]
pub fn is_valid_path(path: &str) -> bool {
    path.starts_with('/')
        && (path.len() == 1 || !path.ends_with('/'))
        && !path.contains('?')
        && !path.contains('#')
}

/// The values that appear more than once, in first-occurrence order.
pub fn duplicates<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for value in values {
        if !seen.insert(value) && !dupes.contains(&value) {
            dupes.push(value);
        }
    }
    dupes
}
