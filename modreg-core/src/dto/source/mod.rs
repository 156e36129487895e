//! Module source DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{self, Decode};

/// Body of `GET /{namespace}/{name}/{provider}/{version}/download`
///
/// Registries either inline the content or answer 204 with an
/// `X-Terraform-Get` header, which the transport surfaces as `download_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSource {
    pub content: String,
    pub download_url: String,
}

impl Decode for ModuleSource {
    fn decode(value: &Value) -> Self {
        Self {
            content: codec::text(value, "content"),
            download_url: codec::text(value, "download_url"),
        }
    }
}
