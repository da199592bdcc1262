//! Campaign tracking parameter removal (`utm_source`, `utm_medium`, ...).

use url::Url;

use crate::error::{PwaError, Result};

/// True if the lowercased `name` starts with any of `prefixes` (also lowercased).
pub fn is_tracking_param<S: AsRef<str>>(name: &str, prefixes: &[S]) -> bool {
    let name = name.to_lowercase();
    prefixes
        .iter()
        .any(|p| name.starts_with(&p.as_ref().to_lowercase()))
}

/// Removes tracking parameters from `url` in place and returns how many were removed.
///
/// Retained parameters keep their order. When nothing matches the query is left
/// untouched; when every parameter matches the query (and its `?`) is dropped.
pub fn remove_tracking_params<S: AsRef<str>>(url: &mut Url, prefixes: &[S]) -> usize {
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let retained: Vec<&(String, String)> = pairs
        .iter()
        .filter(|(name, _)| !is_tracking_param(name, prefixes))
        .collect();

    let removed = pairs.len() - retained.len();
    if removed == 0 {
        return 0;
    }

    if retained.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained.iter().map(|pair| (pair.0.as_str(), pair.1.as_str())));
    }

    tracing::debug!(removed, url = %url, "stripped tracking parameters");
    removed
}

/// Parses `input`, removes tracking parameters and returns the reassembled URL.
pub fn strip_tracking_params<S: AsRef<str>>(input: &str, prefixes: &[S]) -> Result<String> {
    let mut url = Url::parse(input).map_err(|e| PwaError::invalid_url(input, e))?;
    remove_tracking_params(&mut url, prefixes);
    Ok(url.to_string())
}
