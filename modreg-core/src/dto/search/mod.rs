//! Search DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{self, Decode};
use crate::domain::module::ModuleSummary;

/// Default page size for a search
pub const DEFAULT_LIMIT: u32 = 10;

/// Parameters of a single-page module search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query, sent as `q`
    pub query: String,
    pub provider: Option<String>,
    pub namespace: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            provider: None,
            namespace: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Body of `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub modules: Vec<ModuleSummary>,
}

impl Decode for SearchResponse {
    fn decode(value: &Value) -> Self {
        Self {
            modules: codec::list(value, "modules"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_params_defaults() {
        let params = SearchParams::new("vpc");
        assert_eq!(params.query, "vpc");
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 0);
        assert!(params.provider.is_none());
        assert!(params.namespace.is_none());
    }

    #[test]
    fn test_search_response_without_modules() {
        assert!(SearchResponse::decode(&json!({})).modules.is_empty());
        assert!(SearchResponse::decode(&json!({ "modules": null })).modules.is_empty());
        assert!(SearchResponse::decode(&Value::Null).modules.is_empty());
    }

    #[test]
    fn test_search_response_decodes_each_module() {
        let response = SearchResponse::decode(&json!({
            "modules": [
                { "namespace": "hashicorp", "name": "vpc", "provider": "aws" },
                { "name": "orphan" }
            ]
        }));
        assert_eq!(response.modules.len(), 2);
        assert_eq!(response.modules[0].provider, "aws");
        assert_eq!(response.modules[1].namespace, "");
        assert_eq!(response.modules[1].name, "orphan");
    }
}
