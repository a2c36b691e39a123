//! Sitemap XML rendering.
//!
//! Renders the aggregated URL set into a single sitemap 0.9 document,
//! annotated with `xhtml:link rel="alternate"` entries for pages that
//! participate in a regional pair. The output is deterministic: record
//! order follows the aggregate, annotation order follows the region tag
//! constants.
//!
//! ## Document shape
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/page</loc>
//!     <lastmod>2026-07-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! The XHTML namespace is declared on `<urlset>` only when at least one
//! regional pair exists in the input, so pair-free sites keep the plain
//! namespace set.

use crate::aggregate::SiteUrls;
use crate::hreflang::HreflangIndex;

/// The sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// The XHTML namespace used for alternate-language links.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Escape a text value for insertion into the XML document.
///
/// Single pass over the original characters: each of `&`, `<`, `>`, `'`,
/// `"` is replaced exactly once, so ampersands introduced by the other
/// substitutions are never re-escaped.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the aggregated URL set into sitemap XML text.
///
/// `base_url` must already be validated and slash-trimmed (see
/// [`crate::config::resolve_base_url`]); every `<loc>` and alternate `href`
/// is `base_url` + path, XML-escaped.
#[must_use]
pub fn render(urls: &SiteUrls, hreflang: &HreflangIndex, base_url: &str) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if hreflang.is_empty() {
        xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));
    } else {
        xml.push_str(&format!(
            "<urlset xmlns=\"{SITEMAP_NS}\" xmlns:xhtml=\"{XHTML_NS}\">\n"
        ));
    }

    for record in urls.records() {
        let loc = escape_xml(&format!("{base_url}{}", record.path));

        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{loc}</loc>\n"));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            record.lastmod.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            record.changefreq
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", record.priority));

        for annotation in hreflang.annotations_for(&record.path) {
            let href = escape_xml(&format!("{base_url}{}", annotation.target_path));
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{href}\" />\n",
                annotation.region
            ));
        }

        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
