//! The PWA entity: a manifest URL plus the manifest's raw JSON, with display
//! fields derived on every access.
//!
//! The manifest is only ever stored in its serialized form. Every derived
//! getter reparses it, so a malformed stored manifest surfaces as
//! [`PwaError::InvalidManifest`] from whichever getter touches it first.

mod payload;

pub use payload::ManifestPayload;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::clock::{Clock, SystemClock};
use crate::error::{PwaError, Result};
use crate::manifest::Manifest;
use crate::url_model::{self, DEFAULT_TRACKING_PREFIX};
use crate::user::User;

/// Background color used when the manifest does not set one.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// A Progressive Web App as listed in the directory.
///
/// `created` and `updated` are unix milliseconds taken from a single clock
/// reading at construction; [`Pwa::is_new`] holds until `updated` is advanced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pwa {
    manifest_url: Option<String>,
    manifest_raw: Option<String>,
    created: i64,
    updated: i64,
    visible: bool,
    user: Option<User>,
    meta_description: Option<String>,
    encoded_start_url: Option<String>,
}

impl Pwa {
    /// Creates a PWA stamped with the system clock.
    pub fn new(manifest_url: Option<&str>, payload: impl Into<ManifestPayload>) -> Self {
        Self::with_clock(manifest_url, payload, &SystemClock)
    }

    /// Creates a PWA stamped with `clock`. Any fragment on `manifest_url` is dropped.
    pub fn with_clock(
        manifest_url: Option<&str>,
        payload: impl Into<ManifestPayload>,
        clock: &dyn Clock,
    ) -> Self {
        let now = clock.now_millis();
        Self {
            manifest_url: manifest_url.map(url_model::remove_hash),
            manifest_raw: payload.into().into_raw(),
            created: now,
            updated: now,
            visible: true,
            user: None,
            meta_description: None,
            encoded_start_url: None,
        }
    }

    pub fn manifest_url(&self) -> Option<&str> {
        self.manifest_url.as_deref()
    }

    pub fn created(&self) -> i64 {
        self.created
    }

    pub fn updated(&self) -> i64 {
        self.updated
    }

    /// Records an external update at `timestamp` (unix milliseconds).
    pub fn set_updated(&mut self, timestamp: i64) {
        self.updated = timestamp;
    }

    /// Records an external update at the current time of `clock`.
    pub fn touch(&mut self, clock: &dyn Clock) {
        self.updated = clock.now_millis();
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    pub fn set_meta_description(&mut self, description: Option<String>) {
        self.meta_description = description;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Wraps `descriptor` in a [`User`] and stores it. No validation.
    pub fn set_user(&mut self, descriptor: Value) {
        self.user = Some(User::new(descriptor));
    }

    /// Value cached by the last [`Pwa::generate_encoded_start_url`] call.
    pub fn encoded_start_url(&self) -> Option<&str> {
        self.encoded_start_url.as_deref()
    }

    /// True while `updated` still equals `created`.
    pub fn is_new(&self) -> bool {
        self.created == self.updated
    }

    /// Parses the stored manifest. `None` when nothing (or an empty string) is stored.
    pub fn manifest(&self) -> Result<Option<Manifest>> {
        match self.manifest_raw.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => Manifest::parse(self.manifest_url.as_deref(), raw)
                .map(Some)
                .map_err(|err| {
                    tracing::debug!(error = %err, "stored manifest failed to parse");
                    err
                }),
        }
    }

    pub fn set_manifest(&mut self, payload: impl Into<ManifestPayload>) {
        self.manifest_raw = payload.into().into_raw();
    }

    pub fn set_manifest_raw(&mut self, raw: Option<String>) {
        self.manifest_raw = raw;
    }

    /// Stores the model's serialized form; the model itself is not kept.
    pub fn set_manifest_from_model(&mut self, manifest: &Manifest) {
        self.manifest_raw = Some(manifest.raw().to_string());
    }

    /// The stored raw manifest, exactly as it was set.
    pub fn manifest_as_string(&self) -> Option<&str> {
        self.manifest_raw.as_deref()
    }

    pub fn short_name(&self) -> Result<String> {
        Ok(self.manifest_member(Manifest::short_name)?.unwrap_or_default())
    }

    pub fn name(&self) -> Result<String> {
        Ok(self.manifest_member(Manifest::name)?.unwrap_or_default())
    }

    /// `name`, else `short_name`, else the manifest URL without scheme and file name.
    pub fn display_name(&self) -> Result<String> {
        let name = self.name()?;
        if !name.is_empty() {
            return Ok(name);
        }
        let short_name = self.short_name()?;
        if !short_name.is_empty() {
            return Ok(short_name);
        }
        Ok(url_model::trim_manifest_file(
            self.manifest_url.as_deref().unwrap_or_default(),
        ))
    }

    /// Manifest description, else the page's meta description, else empty.
    pub fn description(&self) -> Result<String> {
        if let Some(description) = self.manifest_member(Manifest::description)? {
            return Ok(description);
        }
        Ok(self.meta_description.clone().unwrap_or_default())
    }

    pub fn start_url(&self) -> Result<String> {
        Ok(self.manifest_member(Manifest::start_url)?.unwrap_or_default())
    }

    /// Start URL resolved against the manifest URL with `utm_*` parameters removed.
    ///
    /// Empty when there is no manifest URL.
    pub fn absolute_start_url(&self) -> Result<String> {
        self.absolute_start_url_with(&[DEFAULT_TRACKING_PREFIX])
    }

    /// Like [`Pwa::absolute_start_url`], stripping parameters that start with any of `prefixes`.
    pub fn absolute_start_url_with<S: AsRef<str>>(&self, prefixes: &[S]) -> Result<String> {
        let manifest_url = match self.present_manifest_url() {
            Some(url) => url,
            None => return Ok(String::new()),
        };
        let start_url = self.start_url()?;
        url_model::normalize_start_url(manifest_url, &start_url, prefixes)
    }

    pub fn background_color(&self) -> Result<String> {
        Ok(self
            .manifest_member(Manifest::background_color)?
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()))
    }

    /// Percent-encodes host and path of the absolute start URL and caches the result.
    ///
    /// Recomputed on every call so the cache follows the current manifest.
    pub fn generate_encoded_start_url(&mut self) -> Result<String> {
        if self.present_manifest_url().is_none() {
            return Err(PwaError::MissingManifestUrl);
        }
        let absolute = self.absolute_start_url()?;
        let parsed = Url::parse(&absolute).map_err(|e| PwaError::invalid_url(&absolute, e))?;
        let host = parsed.host_str().ok_or_else(|| PwaError::MissingHost {
            url: absolute.clone(),
        })?;
        let encoded = url_model::encode_uri_component(&format!("{host}{}", parsed.path()));
        self.encoded_start_url = Some(encoded.clone());
        Ok(encoded)
    }

    fn present_manifest_url(&self) -> Option<&str> {
        self.manifest_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Reads one string member of the stored manifest; empty strings count as absent.
    fn manifest_member(&self, read: impl Fn(&Manifest) -> Option<&str>) -> Result<Option<String>> {
        Ok(self.manifest()?.and_then(|manifest| {
            read(&manifest)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        }))
    }
}

#[cfg(test)]
mod tests;
