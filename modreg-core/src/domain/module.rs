//! Module domain types
//!
//! A module is keyed by its `namespace/name/provider` triple. Records decoded
//! from the registry keep whatever identity the server sent (possibly empty);
//! a [`ModuleRef`] can only be built once all three parts are present.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::codec::{self, Decode};
use crate::error::ValidationError;

/// Identity of a module in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleRef {
    namespace: String,
    name: String,
    provider: String,
}

impl ModuleRef {
    /// Build a reference, rejecting empty identity parts
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let namespace = namespace.into();
        let name = name.into();
        let provider = provider.into();

        for (field, value) in [
            ("namespace", &namespace),
            ("name", &name),
            ("provider", &provider),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
            if !value.chars().all(is_identity_char) {
                return Err(ValidationError::Invalid(format!(
                    "{} may only contain letters, digits, '-', '_' and '.'",
                    field
                )));
            }
        }

        Ok(Self {
            namespace,
            name,
            provider,
        })
    }

    /// Parse `namespace/name/provider`
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(name), Some(provider), None) => {
                Self::new(namespace, name, provider)
            }
            _ => Err(ValidationError::Invalid(format!(
                "expected namespace/name/provider, got `{}`",
                input
            ))),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}

/// Identity parts are used verbatim as URL path segments
fn is_identity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.namespace, self.name, self.provider)
    }
}

/// A module as listed by search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSummary {
    pub id: String,
    pub owner: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub source: String,
    pub provider: String,
}

impl ModuleSummary {
    /// Navigable reference, if the server supplied a full identity
    pub fn reference(&self) -> Option<ModuleRef> {
        ModuleRef::new(&self.namespace, &self.name, &self.provider).ok()
    }
}

impl Decode for ModuleSummary {
    fn decode(value: &Value) -> Self {
        Self {
            id: codec::text(value, "id"),
            owner: codec::text(value, "owner"),
            namespace: codec::text(value, "namespace"),
            name: codec::text(value, "name"),
            version: codec::text(value, "version"),
            description: codec::text(value, "description"),
            source: codec::text(value, "source"),
            provider: codec::text(value, "provider"),
        }
    }
}

/// Input variable of a module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
    pub description: String,
    /// Default value, rendered verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Decode for Input {
    fn decode(value: &Value) -> Self {
        Self {
            name: codec::text(value, "name"),
            input_type: codec::text(value, "type"),
            description: codec::text(value, "description"),
            default: codec::raw(value, "default"),
        }
    }
}

/// Output value of a module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    pub name: String,
    pub description: String,
}

impl Decode for Output {
    fn decode(value: &Value) -> Self {
        Self {
            name: codec::text(value, "name"),
            description: codec::text(value, "description"),
        }
    }
}

/// Another module this one depends on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    pub source: String,
    pub version: String,
}

impl Decode for Dependency {
    fn decode(value: &Value) -> Self {
        Self {
            source: codec::text(value, "source"),
            version: codec::text(value, "version"),
        }
    }
}

/// Everything known about the latest version of a module
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleDetail {
    pub namespace: String,
    pub name: String,
    pub provider: String,
    pub version: String,
    pub description: String,
    pub owner: String,
    pub source: String,
    pub readme: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub dependencies: Vec<Dependency>,
    /// Module content as returned by the download endpoint
    pub content: String,
    /// Location advertised through `X-Terraform-Get`, if any
    pub download_url: String,
}

impl ModuleDetail {
    pub fn reference(&self) -> Option<ModuleRef> {
        ModuleRef::new(&self.namespace, &self.name, &self.provider).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use serde_json::json;

    #[test]
    fn test_module_ref_rejects_missing_parts() {
        assert_eq!(
            ModuleRef::new("", "vpc", "aws"),
            Err(ValidationError::Missing("namespace"))
        );
        assert_eq!(
            ModuleRef::new("hashicorp", " ", "aws"),
            Err(ValidationError::Missing("name"))
        );
        assert!(ModuleRef::new("a/b", "vpc", "aws").is_err());
        assert!(ModuleRef::new("hashicorp", "vpc?x=1", "aws").is_err());
        assert!(ModuleRef::new("terraform-aws-modules", "vpc_v2", "aws").is_ok());

        let reference = ModuleRef::new("hashicorp", "vpc", "aws").unwrap();
        assert_eq!(reference.to_string(), "hashicorp/vpc/aws");
    }

    #[test]
    fn test_module_ref_parse() {
        let reference = ModuleRef::parse("hashicorp/consul/aws").unwrap();
        assert_eq!(reference.namespace(), "hashicorp");
        assert_eq!(reference.name(), "consul");
        assert_eq!(reference.provider(), "aws");

        assert!(ModuleRef::parse("hashicorp/consul").is_err());
        assert!(ModuleRef::parse("a/b/c/d").is_err());
        assert!(ModuleRef::parse("a//c").is_err());
    }

    #[test]
    fn test_summary_decode_empty_object() {
        let summary = ModuleSummary::decode(&json!({}));
        assert_eq!(summary, ModuleSummary::default());
        assert!(summary.reference().is_none());
    }

    #[test]
    fn test_summary_decode_does_not_synthesize_identity() {
        let summary = ModuleSummary::decode(&json!({
            "namespace": "hashicorp",
            "name": "vpc",
            "description": "A VPC"
        }));
        assert_eq!(summary.provider, "");
        assert!(summary.reference().is_none());
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = ModuleSummary {
            id: "hashicorp/vpc/aws/1.0.0".to_string(),
            owner: "hashicorp".to_string(),
            namespace: "hashicorp".to_string(),
            name: "vpc".to_string(),
            version: "1.0.0".to_string(),
            description: "A VPC".to_string(),
            source: "https://github.com/hashicorp/terraform-aws-vpc".to_string(),
            provider: "aws".to_string(),
        };
        assert_eq!(ModuleSummary::decode(&encode(&summary)), summary);
        assert_eq!(
            summary.reference().map(|r| r.to_string()),
            Some("hashicorp/vpc/aws".to_string())
        );
    }

    #[test]
    fn test_input_decode_keeps_default_verbatim() {
        let input = Input::decode(&json!({
            "name": "cidr",
            "type": "string",
            "description": "CIDR block",
            "default": { "a": [1, "two"] }
        }));
        assert_eq!(input.input_type, "string");
        assert_eq!(input.default, Some(json!({ "a": [1, "two"] })));

        let encoded = encode(&input);
        assert_eq!(encoded["type"], "string");
        assert_eq!(Input::decode(&encoded), input);
    }

    #[test]
    fn test_input_without_default_omits_it() {
        let input = Input::decode(&json!({ "name": "cidr", "default": null }));
        assert_eq!(input.default, None);
        assert!(encode(&input).get("default").is_none());
    }
}
