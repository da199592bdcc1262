//! `pwadir encode-start-url <manifest-url>` – percent-encoded start URL key.

use anyhow::Result;
use std::path::Path;

use super::load_pwa;

pub fn run_encode_start_url(manifest_url: &str, manifest_file: Option<&Path>) -> Result<()> {
    let mut pwa = load_pwa(manifest_url, manifest_file)?;
    let encoded = pwa.generate_encoded_start_url()?;
    println!("{encoded}");
    Ok(())
}
