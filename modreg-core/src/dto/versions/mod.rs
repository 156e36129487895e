//! Version listing DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::codec::{self, Decode};
use crate::domain::module::{Dependency, Input, ModuleDetail, ModuleRef, Output};
use crate::domain::version::VersionEntry;

use super::source::ModuleSource;

/// Body of `GET /{namespace}/{name}/{provider}/versions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionsResponse {
    pub modules: Vec<ModuleVersions>,
}

impl VersionsResponse {
    /// All version strings across every module record, empties dropped
    pub fn version_strings(&self) -> Vec<String> {
        self.modules
            .iter()
            .flat_map(|module| module.versions.iter())
            .filter(|entry| !entry.version.is_empty())
            .map(|entry| entry.version.clone())
            .collect()
    }
}

impl Decode for VersionsResponse {
    fn decode(value: &Value) -> Self {
        Self {
            modules: codec::list(value, "modules"),
        }
    }
}

/// One module record of the versions endpoint
///
/// Besides the version list, registries may attach metadata describing the
/// module; all of it is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleVersions {
    /// Versions in server order
    pub versions: Vec<VersionEntry>,
    pub description: String,
    pub owner: String,
    pub source: String,
    pub readme: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    /// Unique by `source`
    pub dependencies: Vec<Dependency>,
}

impl ModuleVersions {
    /// First version entry as listed by the server
    ///
    /// Server order is trusted; no semantic-version sorting happens here.
    pub fn latest(&self) -> Option<&str> {
        self.versions
            .first()
            .map(|entry| entry.version.as_str())
            .filter(|version| !version.is_empty())
    }

    /// Combine this record with the fetched source into a detail view
    pub fn into_detail(
        self,
        reference: &ModuleRef,
        version: String,
        source: ModuleSource,
    ) -> ModuleDetail {
        ModuleDetail {
            namespace: reference.namespace().to_string(),
            name: reference.name().to_string(),
            provider: reference.provider().to_string(),
            version,
            description: self.description,
            owner: self.owner,
            source: self.source,
            readme: self.readme,
            inputs: self.inputs,
            outputs: self.outputs,
            dependencies: self.dependencies,
            content: source.content,
            download_url: source.download_url,
        }
    }
}

impl Decode for ModuleVersions {
    fn decode(value: &Value) -> Self {
        let mut seen = HashSet::new();
        let dependencies = codec::list::<Dependency>(value, "dependencies")
            .into_iter()
            .filter(|dep| seen.insert(dep.source.clone()))
            .collect();

        Self {
            versions: codec::list(value, "versions"),
            description: codec::text(value, "description"),
            owner: codec::text(value, "owner"),
            source: codec::text(value, "source"),
            readme: codec::text(value, "readme"),
            inputs: codec::list(value, "inputs"),
            outputs: codec::list(value, "outputs"),
            dependencies,
        }
    }
}
