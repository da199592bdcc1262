//! CLI command handlers. Each command is in its own file.

mod clean_url;
mod encode_start_url;
mod inspect;

pub use clean_url::run_clean_url;
pub use encode_start_url::run_encode_start_url;
pub use inspect::run_inspect;

use anyhow::{Context, Result};
use pwadir_core::{ManifestPayload, Pwa};
use std::path::Path;

/// Builds a PWA from a manifest URL and an optional local manifest file.
pub(crate) fn load_pwa(manifest_url: &str, manifest_file: Option<&Path>) -> Result<Pwa> {
    let payload = match manifest_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read manifest: {}", path.display()))?;
            ManifestPayload::Raw(raw)
        }
        None => ManifestPayload::Empty,
    };
    Ok(Pwa::new(Some(manifest_url), payload))
}
