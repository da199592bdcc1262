//! Owner of a submitted PWA.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User built from an arbitrary descriptor. The descriptor is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    descriptor: Value,
}

impl User {
    pub fn new(descriptor: Value) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &Value {
        &self.descriptor
    }

    /// The descriptor's string `id` member, if it has one.
    pub fn id(&self) -> Option<&str> {
        self.descriptor.get("id").and_then(Value::as_str)
    }
}
