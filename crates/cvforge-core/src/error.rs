//! Error types and handling for cvforge-core operations.
//!
//! The sitemap pipeline is a single-shot build step, so the error surface is
//! small: configuration resolution, output writing, and the I/O underneath
//! them. Errors carry a `category()` identifier for structured logging.
//!
//! Registry data problems (duplicate slugs, malformed paths) are deliberately
//! not represented here: the generator performs no runtime validation of its
//! inputs, and those invariants are enforced by the consistency test suite.

use thiserror::Error;

/// The main error type for cvforge-core operations.
///
/// All fallible functions in this crate return `Result<T, Error>`. The
/// binary decides which failures abort the build; the library only reports
/// them.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers file system operations while writing sitemap outputs. The
    /// underlying `std::io::Error` is preserved for detailed inspection.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Build configuration is missing or invalid.
    ///
    /// Raised when a required setting (such as the site base URL) is absent.
    /// Always fatal: the build must abort rather than emit a sitemap with
    /// malformed locations.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A base URL or target URL is malformed.
    ///
    /// Raised when the configured base URL cannot be parsed as an absolute
    /// `http`/`https` URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An output destination could not be written.
    ///
    /// Covers failures beyond basic file I/O, such as a temp file that
    /// cannot be renamed into place. Whether this is fatal depends on the
    /// destination: primary outputs abort the build, secondary outputs are
    /// skipped with a warning.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Returns a static string that categorizes the error type for logging
    /// and error handling logic.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Storage(_) => "storage",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
