//! Web app manifest wrapper.
//!
//! Keeps the manifest's serialized form next to the parsed JSON and reads the
//! display members leniently: a member that is missing or not a string is
//! treated as absent. No schema validation happens here.

use serde_json::Value;

use crate::error::Result;

/// Parsed web app manifest plus the URL it was fetched from.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    url: Option<String>,
    raw: String,
    value: Value,
}

impl Manifest {
    /// Wraps an already parsed manifest. The raw form is the compact JSON serialization.
    pub fn new(url: Option<&str>, value: Value) -> Self {
        Self {
            url: url.map(str::to_string),
            raw: value.to_string(),
            value,
        }
    }

    /// Parses `raw` as JSON, keeping `raw` verbatim as the serialized form.
    pub fn parse(url: Option<&str>, raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self {
            url: url.map(str::to_string),
            raw: raw.to_string(),
            value,
        })
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Serialized (string) form of the manifest.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn short_name(&self) -> Option<&str> {
        self.member("short_name")
    }

    pub fn name(&self) -> Option<&str> {
        self.member("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.member("description")
    }

    pub fn start_url(&self) -> Option<&str> {
        self.member("start_url")
    }

    pub fn background_color(&self) -> Option<&str> {
        self.member("background_color")
    }

    pub fn theme_color(&self) -> Option<&str> {
        self.member("theme_color")
    }

    pub fn display(&self) -> Option<&str> {
        self.member("display")
    }

    fn member(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(Value::as_str)
    }
}
