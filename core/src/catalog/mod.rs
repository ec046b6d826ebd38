// storefront/src/catalog/mod.rs

//! Sources of catalog data: the remote REST API and a fixed in-memory list.

pub mod http;
pub mod provider;

pub use http::HttpCatalog;
pub use provider::{CatalogProvider, StaticCatalog};
