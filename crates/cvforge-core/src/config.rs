//! Build configuration resolution.
//!
//! The pipeline needs exactly one required setting: the absolute base URL
//! prefixed onto every path in the generated document. It comes from the
//! `SITE_BASE_URL` environment variable (or an explicit CLI flag) and is
//! validated and normalized once, before any rendering happens — a missing
//! or malformed base URL aborts the build rather than producing a sitemap
//! with broken locations.

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// Environment variable supplying the absolute site base URL.
pub const BASE_URL_ENV: &str = "SITE_BASE_URL";

/// Resolved configuration for one build invocation.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Validated, slash-trimmed absolute base URL.
    pub base_url: String,
    /// Primary output path; failure to write it is fatal.
    pub out: PathBuf,
    /// Secondary output paths; written best-effort.
    pub publish: Vec<PathBuf>,
}

/// Validate and normalize the configured base URL.
///
/// Accepts an absolute `http`/`https` URL and strips trailing slashes so
/// that joining with site-relative paths never doubles a separator.
///
/// # Errors
///
/// Returns [`Error::Config`] when the value is absent or empty, and
/// [`Error::InvalidUrl`] when it does not parse as an absolute http(s) URL.
pub fn resolve_base_url(value: Option<&str>) -> Result<String> {
    let raw = value.map(str::trim).filter(|v| !v.is_empty());
    let Some(raw) = raw else {
        return Err(Error::Config(format!(
            "{BASE_URL_ENV} is not set; pass --base-url or export it before building"
        )));
    };

    let parsed =
        Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{BASE_URL_ENV}={raw}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(Error::InvalidUrl(format!(
            "{BASE_URL_ENV}={raw}: expected an absolute http(s) URL"
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
