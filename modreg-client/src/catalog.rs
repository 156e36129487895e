//! Module catalog operations
//!
//! Each operation is one typed call the front end makes instead of touching
//! the transport. Transport failures never escape as-is: they are logged and
//! re-expressed as [`CatalogError`] values with fixed messages.

use modreg_core::codec::{Decode, encode};
use modreg_core::domain::module::{ModuleDetail, ModuleRef, ModuleSummary};
use modreg_core::dto::register::RegisterUser;
use modreg_core::dto::search::{SearchParams, SearchResponse};
use modreg_core::dto::source::ModuleSource;
use modreg_core::dto::versions::VersionsResponse;
use std::sync::Arc;
use tracing::{debug, error};

use crate::error::{
    CatalogError, FETCH_MODULES_FAILED, LOAD_DETAILS_FAILED, MODULE_NOT_FOUND, NO_VERSIONS_FOUND,
    REGISTRATION_FAILED, Result, TransportError,
};
use crate::transport::{HttpTransport, QueryParams, Transport};

/// Typed access to the registry's module API
///
/// Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct ModuleCatalog {
    transport: Arc<dyn Transport>,
}

impl ModuleCatalog {
    /// Create a catalog over the given transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Create a catalog over an already shared transport
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a catalog talking HTTP to `base_url`
    ///
    /// # Example
    /// ```
    /// use modreg_client::ModuleCatalog;
    ///
    /// let catalog = ModuleCatalog::http("http://localhost:8000/v1/modules");
    /// ```
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::new(HttpTransport::new(base_url))
    }

    // =============================================================================
    // Search
    // =============================================================================

    /// Search modules, one page at a time
    ///
    /// A response without a `modules` field is an empty result, not an error.
    ///
    /// # Example
    /// ```no_run
    /// # use modreg_client::ModuleCatalog;
    /// # use modreg_core::dto::search::SearchParams;
    /// # async fn example() -> anyhow::Result<()> {
    /// let catalog = ModuleCatalog::http("http://localhost:8000/v1/modules");
    /// let modules = catalog
    ///     .search_modules(&SearchParams::new("vpc").provider("aws"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_modules(&self, params: &SearchParams) -> Result<Vec<ModuleSummary>> {
        let body = self
            .transport
            .get("/search", &search_query(params))
            .await
            .map_err(|e| fetch_failed(FETCH_MODULES_FAILED, e))?;

        Ok(SearchResponse::decode(&body).modules)
    }

    // =============================================================================
    // Versions & Details
    // =============================================================================

    /// List every published version of a module, in server order
    pub async fn get_module_versions(&self, module: &ModuleRef) -> Result<Vec<String>> {
        let versions = self
            .list_versions(module)
            .await
            .map_err(|e| fetch_failed(FETCH_MODULES_FAILED, e))?;

        Ok(versions.version_strings())
    }

    /// Load the latest version of a module together with its source
    ///
    /// The latest version is the first entry of the first module record;
    /// server order is trusted. The source download only starts once that
    /// version is known.
    pub async fn get_module_details(&self, module: &ModuleRef) -> Result<ModuleDetail> {
        let versions = self
            .list_versions(module)
            .await
            .map_err(|e| fetch_failed(FETCH_MODULES_FAILED, e))?;

        let record = versions
            .modules
            .into_iter()
            .next()
            .ok_or(CatalogError::NotFound(MODULE_NOT_FOUND))?;

        let latest = record
            .latest()
            .map(str::to_owned)
            .ok_or(CatalogError::NotFound(NO_VERSIONS_FOUND))?;
        debug!("Latest version of {} is {}", module, latest);

        let source = self.fetch_module_source(module, &latest).await?;

        Ok(record.into_detail(module, latest, source))
    }

    /// Download the source of one specific module version
    pub async fn fetch_module_source(
        &self,
        module: &ModuleRef,
        version: &str,
    ) -> Result<ModuleSource> {
        let path = format!("{}/download", module_path(module, Some(version)));
        let body = self
            .transport
            .get(&path, &QueryParams::new())
            .await
            .map_err(|e| fetch_failed(LOAD_DETAILS_FAILED, e))?;

        Ok(ModuleSource::decode(&body))
    }

    // =============================================================================
    // Accounts
    // =============================================================================

    /// Register a new account
    ///
    /// The form is validated locally first; the response body is ignored.
    pub async fn register(&self, user: &RegisterUser) -> Result<()> {
        user.validate()?;

        self.transport
            .post("/register", &encode(user))
            .await
            .map_err(|e| fetch_failed(REGISTRATION_FAILED, e))?;

        Ok(())
    }

    async fn list_versions(
        &self,
        module: &ModuleRef,
    ) -> std::result::Result<VersionsResponse, TransportError> {
        let path = format!("{}/versions", module_path(module, None));
        let body = self.transport.get(&path, &QueryParams::new()).await?;
        Ok(VersionsResponse::decode(&body))
    }
}

impl std::fmt::Debug for ModuleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleCatalog").finish_non_exhaustive()
    }
}

/// Query string of a search: `q, provider?, namespace?, limit, offset`
fn search_query(params: &SearchParams) -> QueryParams {
    QueryParams::new()
        .with("q", &params.query)
        .with_opt("provider", params.provider.as_deref())
        .with_opt("namespace", params.namespace.as_deref())
        .with("limit", params.limit)
        .with("offset", params.offset)
}

fn module_path(module: &ModuleRef, version: Option<&str>) -> String {
    let base = format!(
        "/{}/{}/{}",
        module.namespace(),
        module.name(),
        module.provider()
    );
    match version {
        Some(version) => format!("{}/{}", base, version),
        None => base,
    }
}

fn fetch_failed(message: &'static str, source: TransportError) -> CatalogError {
    error!("{}: {}", message, source);
    CatalogError::fetch(message, source)
}
