//! Manifest input accepted by [`super::Pwa`] construction and `set_manifest`.

use crate::manifest::Manifest;

/// Either a raw manifest string or a manifest model. Only the string form is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ManifestPayload {
    #[default]
    Empty,
    Raw(String),
    Model(Manifest),
}

impl ManifestPayload {
    /// Collapses the payload to the serialized form stored on the entity.
    pub fn into_raw(self) -> Option<String> {
        match self {
            ManifestPayload::Empty => None,
            ManifestPayload::Raw(raw) => Some(raw),
            ManifestPayload::Model(manifest) => Some(manifest.raw().to_string()),
        }
    }
}

impl From<String> for ManifestPayload {
    fn from(raw: String) -> Self {
        ManifestPayload::Raw(raw)
    }
}

impl From<&str> for ManifestPayload {
    fn from(raw: &str) -> Self {
        ManifestPayload::Raw(raw.to_string())
    }
}

impl From<Option<String>> for ManifestPayload {
    fn from(raw: Option<String>) -> Self {
        raw.map_or(ManifestPayload::Empty, ManifestPayload::Raw)
    }
}

impl From<Manifest> for ManifestPayload {
    fn from(manifest: Manifest) -> Self {
        ManifestPayload::Model(manifest)
    }
}

impl From<&Manifest> for ManifestPayload {
    fn from(manifest: &Manifest) -> Self {
        ManifestPayload::Model(manifest.clone())
    }
}
