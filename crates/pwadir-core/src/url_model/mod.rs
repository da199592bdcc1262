//! URL helpers for manifest and start URLs.
//!
//! Strips fragments, trims the manifest file off a URL for display, resolves
//! relative start URLs and removes campaign tracking parameters.

mod encode;
mod fragment;
mod tracking;
mod trim;

pub use encode::encode_uri_component;
pub use fragment::remove_hash;
pub use tracking::{is_tracking_param, remove_tracking_params, strip_tracking_params};
pub use trim::trim_manifest_file;

use url::Url;

use crate::error::{PwaError, Result};

/// Query parameter prefix stripped when no other prefixes are configured.
pub const DEFAULT_TRACKING_PREFIX: &str = "utm_";

/// Start URL used when the manifest does not name one.
pub const DEFAULT_START_URL: &str = "/";

/// Resolves `reference` against `base`, returning an absolute URL.
///
/// Fails if `base` is not an absolute URL or `reference` cannot be joined.
pub fn resolve_against(base: &str, reference: &str) -> Result<Url> {
    let base_url = Url::parse(base).map_err(|e| PwaError::invalid_url(base, e))?;
    base_url
        .join(reference)
        .map_err(|e| PwaError::invalid_url(reference, e))
}

/// Resolves a start URL against the manifest URL and strips tracking parameters.
pub fn normalize_start_url<S: AsRef<str>>(
    manifest_url: &str,
    start_url: &str,
    prefixes: &[S],
) -> Result<String> {
    let start_url = if start_url.is_empty() {
        DEFAULT_START_URL
    } else {
        start_url
    };
    let mut resolved = resolve_against(manifest_url, start_url)?;
    remove_tracking_params(&mut resolved, prefixes);
    Ok(resolved.to_string())
}
