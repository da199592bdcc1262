//! `pwadir inspect <manifest-url>` – show derived display fields.

use anyhow::Result;
use pwadir_core::config::PwadirConfig;
use pwadir_core::Pwa;
use std::path::Path;

use super::load_pwa;

pub fn run_inspect(
    cfg: &PwadirConfig,
    manifest_url: &str,
    manifest_file: Option<&Path>,
    meta_description: Option<String>,
) -> Result<()> {
    let mut pwa = load_pwa(manifest_url, manifest_file)?;
    pwa.set_meta_description(meta_description);
    print!("{}", render(&pwa, cfg.tracking_param_prefixes.as_slice())?);
    Ok(())
}

/// One `LABEL value` line per derived field.
fn render(pwa: &Pwa, prefixes: &[String]) -> Result<String> {
    let rows = [
        ("DISPLAY NAME", pwa.display_name()?),
        ("NAME", pwa.name()?),
        ("SHORT NAME", pwa.short_name()?),
        ("DESCRIPTION", pwa.description()?),
        ("START URL", pwa.start_url()?),
        ("ABSOLUTE", pwa.absolute_start_url_with(prefixes)?),
        ("BACKGROUND", pwa.background_color()?),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let value = if value.is_empty() { "-".to_string() } else { value };
        out.push_str(&format!("{:<14} {}\n", label, value));
    }
    tracing::debug!(manifest_url = ?pwa.manifest_url(), "inspected pwa");
    Ok(out)
}
