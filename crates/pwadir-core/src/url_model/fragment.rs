//! Fragment removal.

/// Drops everything from the first `#` onward.
pub fn remove_hash(url: &str) -> String {
    match url.split_once('#') {
        Some((before, _)) => before.to_string(),
        None => url.to_string(),
    }
}
