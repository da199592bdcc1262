//! Display form of a manifest URL: host and directory, no scheme or file.

/// Trims the scheme prefix and the trailing file name from `url`.
///
/// Starts after the first `//` (or at 0) and ends at the last `/` (or at the
/// end). When the last `/` is part of the `//` itself the bounds are swapped,
/// so `https://example.com` yields `"/"`.
///
/// # Examples
///
/// - `trim_manifest_file("https://example.com/app/manifest.json")` → `"example.com/app"`
/// - `trim_manifest_file("manifest.json")` → `"manifest.json"`
pub fn trim_manifest_file(url: &str) -> String {
    let start = url.find("//").map(|i| i + 2).unwrap_or(0);
    let end = url.rfind('/').unwrap_or(url.len());
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    url[lo..hi].to_string()
}
