//! Modreg HTTP Client
//!
//! A typed client for the module registry API: search modules, list their
//! versions, load module details and register accounts.
//!
//! The catalog receives its transport explicitly, so one configured
//! [`HttpTransport`] can be shared by every caller and replaced by an
//! in-memory [`Transport`] in tests.
//!
//! # Example
//!
//! ```no_run
//! use modreg_client::{HttpTransport, ModuleCatalog};
//! use modreg_core::domain::module::ModuleRef;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = ModuleCatalog::new(HttpTransport::new("http://localhost:8000/v1/modules"));
//!
//!     let module = ModuleRef::parse("hashicorp/consul/aws")?;
//!     let detail = catalog.get_module_details(&module).await?;
//!
//!     println!("{} {}", module, detail.version);
//!     Ok(())
//! }
//! ```

mod catalog;
pub mod error;
pub mod state;
pub mod transport;

// Re-export commonly used types
pub use catalog::ModuleCatalog;
pub use error::{CatalogError, Result, TransportError};
pub use state::QueryState;
pub use transport::{HttpTransport, QueryParams, Transport};
