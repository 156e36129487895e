//! Service discovery DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{self, Decode};

/// Location of the discovery document relative to a registry root
pub const DISCOVERY_PATH: &str = "/.well-known/terraform.json";

/// Body of the discovery document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDiscovery {
    /// Base path (or absolute URL) of the modules API
    #[serde(rename = "modules.v1")]
    pub modules_v1: String,
}

impl ServiceDiscovery {
    /// Resolve the modules API base URL against the registry root
    ///
    /// Absolute URLs are taken as-is; paths are appended to `root`.
    /// Returns `None` when the registry does not advertise the modules API.
    pub fn modules_url(&self, root: &str) -> Option<String> {
        let base = self.modules_v1.trim();
        if base.is_empty() {
            return None;
        }

        if base.starts_with("http://") || base.starts_with("https://") {
            return Some(base.trim_end_matches('/').to_string());
        }

        Some(format!(
            "{}/{}",
            root.trim_end_matches('/'),
            base.trim_matches('/')
        ))
    }
}

impl Decode for ServiceDiscovery {
    fn decode(value: &Value) -> Self {
        Self {
            modules_v1: codec::text(value, "modules.v1"),
        }
    }
}
