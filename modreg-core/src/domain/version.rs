//! Version domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{self, Decode};

/// One published version of a module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionEntry {
    pub version: String,
}

impl VersionEntry {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Decode for VersionEntry {
    fn decode(value: &Value) -> Self {
        Self {
            version: codec::text(value, "version"),
        }
    }
}
