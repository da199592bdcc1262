pub mod config;
pub mod logging;

pub mod clock;
pub mod error;
pub mod manifest;
pub mod pwa;
pub mod url_model;
pub mod user;

pub use error::{PwaError, Result};
pub use manifest::Manifest;
pub use pwa::{ManifestPayload, Pwa};
pub use user::User;
