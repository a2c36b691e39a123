//! Curated data registries feeding the sitemap pipeline.
//!
//! All registries are hand-maintained, in-process constant data: the static
//! marketing/content pages, the job keyword database behind the
//! `/resume-keywords/{slug}` pages, and the job examples database behind the
//! `/examples/{slug}` pages. Content correctness (titles, keyword text) is an
//! authoring concern; the structural invariants (unique slugs, valid paths,
//! field bounds) are enforced by the test suite, not at runtime.

mod jobs;
mod pages;

pub use jobs::JobRegistry;
pub use pages::PageRegistry;

use chrono::NaiveDate;

/// Calendar date for curated registry data.
///
/// An invalid date here is a data-authoring bug; the registry tests construct
/// every curated entry, so it cannot survive a test run.
#[allow(clippy::panic)]
pub(crate) const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date in curated registry data"),
    }
}
