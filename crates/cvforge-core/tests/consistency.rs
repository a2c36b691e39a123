//! Cross-source consistency battery for the curated registries and the
//! rendered sitemap.
//!
//! The generator performs no runtime validation, so everything that keeps
//! the published sitemap correct is asserted here: path and slug
//! uniqueness, field bounds, document structure, and hreflang
//! bidirectionality over the real curated data.

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::NaiveDate;
use cvforge_core::{
    sitemap, validate, HreflangIndex, JobRegistry, PageRegistry, SiteUrls, CV_REGIONS,
    DEFAULT_REGION, RESUME_REGION,
};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

const BASE: &str = "https://cvforge.io";

static LASTMOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

fn build_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn curated_urls() -> SiteUrls {
    SiteUrls::build(
        &PageRegistry::new(),
        &JobRegistry::keywords(),
        &JobRegistry::examples(),
        build_date(),
    )
}

/// One `<url>` block as parsed back out of the rendered document.
#[derive(Debug, Default)]
struct ParsedUrl {
    loc: Option<String>,
    lastmod: Option<String>,
    changefreq: Option<String>,
    priority: Option<String>,
    field_count: usize,
    alternates: Vec<(String, String)>,
}

/// Parse the rendered document back into structured blocks.
fn parse_rendered(xml: &str) -> Vec<ParsedUrl> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut blocks = Vec::new();
    let mut current: Option<ParsedUrl> = None;
    let mut current_element: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                match name.as_str() {
                    "url" => current = Some(ParsedUrl::default()),
                    "loc" | "lastmod" | "changefreq" | "priority" if current.is_some() => {
                        if let Some(block) = current.as_mut() {
                            block.field_count += 1;
                        }
                        current_element = Some(name);
                    },
                    _ => {},
                }
            },
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"link" {
                    let block = current.as_mut().expect("alternate link outside <url>");
                    let mut hreflang = None;
                    let mut href = None;
                    for attr in e.attributes() {
                        let attr = attr.unwrap();
                        let value = attr.unescape_value().unwrap().into_owned();
                        match attr.key.as_ref() {
                            b"hreflang" => hreflang = Some(value),
                            b"href" => href = Some(value),
                            _ => {},
                        }
                    }
                    block.alternates.push((hreflang.unwrap(), href.unwrap()));
                }
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"url" {
                    blocks.push(current.take().expect("unbalanced </url>"));
                }
                current_element = None;
            },
            Ok(Event::Text(e)) => {
                if let (Some(element), Some(block)) = (&current_element, current.as_mut()) {
                    let text = e.unescape().unwrap().trim().to_string();
                    match element.as_str() {
                        "loc" => block.loc = Some(text),
                        "lastmod" => block.lastmod = Some(text),
                        "changefreq" => block.changefreq = Some(text),
                        "priority" => block.priority = Some(text),
                        _ => {},
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => panic!("rendered sitemap is not well-formed XML: {e}"),
            _ => {},
        }
        buf.clear();
    }

    blocks
}

#[test]
fn no_path_appears_twice_across_sources() {
    let urls = curated_urls();
    let dupes = validate::duplicates(urls.all_paths());
    assert!(dupes.is_empty(), "duplicate sitemap paths: {dupes:?}");
}

#[test]
fn slugs_are_unique_within_each_registry() {
    for registry in [JobRegistry::keywords(), JobRegistry::examples()] {
        let dupes = validate::duplicates(registry.slugs());
        assert!(dupes.is_empty(), "duplicate slugs: {dupes:?}");
    }
}

#[test]
fn slugs_match_the_slug_grammar() {
    for registry in [JobRegistry::keywords(), JobRegistry::examples()] {
        for entry in registry.entries() {
            assert!(
                validate::is_valid_slug(&entry.slug),
                "malformed slug: {}",
                entry.slug
            );
        }
    }
}

#[test]
fn static_records_are_within_bounds() {
    for entry in PageRegistry::new().entries() {
        assert!(validate::is_valid_path(&entry.path), "bad path: {}", entry.path);
        assert!(
            (0.0..=1.0).contains(&entry.priority),
            "priority out of range: {} ({})",
            entry.priority,
            entry.path
        );
    }
}

#[test]
fn every_aggregated_path_is_well_formed() {
    let urls = curated_urls();
    for path in urls.all_paths() {
        assert!(validate::is_valid_path(path), "bad path: {path}");
    }
}

#[test]
fn rendered_document_is_structurally_sound() {
    let urls = curated_urls();
    let xml = sitemap::render(&urls, &HreflangIndex::new(), BASE);

    // Tag-count check on the raw text.
    let opens = xml.matches("<url>").count();
    let closes = xml.matches("</url>").count();
    assert!(opens > 0);
    assert_eq!(opens, closes);

    // Structural check via parse-back.
    let blocks = parse_rendered(&xml);
    assert_eq!(blocks.len(), urls.len());

    for block in &blocks {
        assert_eq!(
            block.field_count, 4,
            "expected exactly one loc/lastmod/changefreq/priority in {block:?}"
        );
        let loc = block.loc.as_ref().unwrap();
        assert!(loc.starts_with(BASE), "loc missing base url: {loc}");

        let lastmod = block.lastmod.as_ref().unwrap();
        assert!(LASTMOD_RE.is_match(lastmod), "bad lastmod: {lastmod}");
        assert!(
            NaiveDate::parse_from_str(lastmod, "%Y-%m-%d").is_ok(),
            "lastmod is not a calendar date: {lastmod}"
        );

        let changefreq = block.changefreq.as_ref().unwrap();
        assert!(
            ["daily", "weekly", "monthly", "yearly"].contains(&changefreq.as_str()),
            "bad changefreq: {changefreq}"
        );

        let priority: f32 = block.priority.as_ref().unwrap().parse().unwrap();
        assert!((0.0..=1.0).contains(&priority));
    }
}

#[test]
fn rendered_locations_follow_aggregate_order() {
    let urls = curated_urls();
    let xml = sitemap::render(&urls, &HreflangIndex::new(), BASE);
    let blocks = parse_rendered(&xml);

    let expected: Vec<String> = urls
        .all_paths()
        .iter()
        .map(|path| format!("{BASE}{path}"))
        .collect();
    let actual: Vec<String> = blocks.into_iter().map(|b| b.loc.unwrap()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn hreflang_annotations_are_bidirectional() {
    let urls = curated_urls();
    let index = HreflangIndex::new();
    let xml = sitemap::render(&urls, &index, BASE);
    let blocks = parse_rendered(&xml);

    let find_block = |path: &str| {
        let loc = format!("{BASE}{path}");
        blocks
            .iter()
            .find(|b| b.loc.as_deref() == Some(loc.as_str()))
            .unwrap_or_else(|| panic!("no <url> block for {path}"))
    };

    for pair in index.pairs() {
        assert_eq!(
            index.find_pair(&pair.resume_path),
            index.find_pair(&pair.cv_path)
        );

        let resume_href = format!("{BASE}{}", pair.resume_path);
        let cv_href = format!("{BASE}{}", pair.cv_path);

        // Both sides of the pair carry the same full annotation set: every
        // CV region points at the CV page, the resume region and the
        // default point at the resume page.
        for block in [find_block(&pair.resume_path), find_block(&pair.cv_path)] {
            assert_eq!(block.alternates.len(), CV_REGIONS.len() + 2);
            for region in CV_REGIONS {
                assert!(
                    block
                        .alternates
                        .contains(&(region.to_string(), cv_href.clone())),
                    "missing {region} link in {:?}",
                    block.loc
                );
            }
            for region in [RESUME_REGION, DEFAULT_REGION] {
                assert!(
                    block
                        .alternates
                        .contains(&(region.to_string(), resume_href.clone())),
                    "missing {region} link in {:?}",
                    block.loc
                );
            }
        }
    }
}

#[test]
fn unpaired_pages_carry_no_annotations() {
    let urls = curated_urls();
    let index = HreflangIndex::new();
    let xml = sitemap::render(&urls, &index, BASE);

    for block in parse_rendered(&xml) {
        let loc = block.loc.unwrap();
        let path = loc.strip_prefix(BASE).unwrap();
        if index.find_pair(path).is_none() {
            assert!(
                block.alternates.is_empty(),
                "unpaired page {path} has alternates"
            );
        }
    }
}

#[test]
fn xhtml_namespace_is_declared_only_when_pairs_exist() {
    let urls = curated_urls();

    let with_pairs = sitemap::render(&urls, &HreflangIndex::new(), BASE);
    assert!(with_pairs.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));

    let without_pairs = sitemap::render(&urls, &HreflangIndex::from_pairs(Vec::new()), BASE);
    assert!(!without_pairs.contains("xmlns:xhtml"));
}

#[test]
fn pairing_table_members_exist_as_static_pages() {
    let pages = PageRegistry::new();
    for pair in HreflangIndex::new().pairs() {
        assert!(pages.contains(&pair.resume_path), "{} missing", pair.resume_path);
        assert!(pages.contains(&pair.cv_path), "{} missing", pair.cv_path);
        assert_ne!(pair.resume_path, pair.cv_path);
    }
}
