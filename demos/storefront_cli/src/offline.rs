// storefront_cli/src/offline.rs

use anyhow::{Context, Result};
use storefront::{Product, StaticCatalog};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// The bundled catalog served when `STOREFRONT_OFFLINE` or `--offline` is set.
pub fn sample_catalog() -> Result<StaticCatalog> {
  let products: Vec<Product> =
    serde_json::from_str(SAMPLE_CATALOG).context("Bundled sample catalog is malformed")?;
  tracing::debug!(count = products.len(), "Offline catalog loaded.");
  Ok(StaticCatalog::new(products))
}
