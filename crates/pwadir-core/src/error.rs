//! Error type for PWA model operations.

use thiserror::Error;

/// Failure while deriving a value from a [`crate::Pwa`].
///
/// Only malformed input ends up here. Absent fields are substituted with
/// defaults by the accessors and never produce an error.
#[derive(Debug, Error)]
pub enum PwaError {
    /// A manifest URL or start URL could not be parsed or resolved.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The stored raw manifest is not valid JSON.
    #[error("invalid manifest JSON: {0}")]
    InvalidManifest(#[from] serde_json::Error),
    /// The resolved start URL has no host component.
    #[error("URL has no host: {url}")]
    MissingHost { url: String },
    /// An operation needed the manifest URL but none was set.
    #[error("PWA has no manifest URL")]
    MissingManifestUrl,
}

pub type Result<T> = std::result::Result<T, PwaError>;

impl PwaError {
    pub(crate) fn invalid_url(url: &str, source: url::ParseError) -> Self {
        PwaError::InvalidUrl {
            url: url.to_string(),
            source,
        }
    }
}
