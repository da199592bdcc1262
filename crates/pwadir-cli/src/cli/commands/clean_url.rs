//! `pwadir clean-url <url>` – strip tracking parameters.

use anyhow::Result;
use pwadir_core::config::PwadirConfig;
use pwadir_core::url_model;

pub fn run_clean_url(cfg: &PwadirConfig, url: &str) -> Result<()> {
    let cleaned = url_model::strip_tracking_params(url, cfg.tracking_param_prefixes.as_slice())?;
    println!("{cleaned}");
    Ok(())
}
