// storefront/src/catalog/provider.rs

//! Defines the `CatalogProvider` trait and the in-memory `StaticCatalog`.

use crate::error::{StorefrontError, StorefrontResult};
use crate::model::Product;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{event, Level};

/// Read-only access to the product catalog.
///
/// Every call is a fresh lookup: implementations do not cache, retry, or time
/// out. Callers hold on to the returned products for as long as they need them.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
  async fn list_products(&self) -> StorefrontResult<Vec<Product>>;

  /// Fails with `StorefrontError::NotFound` when no product has this id.
  async fn get_product(&self, id: u64) -> StorefrontResult<Product>;

  async fn list_categories(&self) -> StorefrontResult<Vec<String>>;
}

#[async_trait]
impl<P: CatalogProvider + ?Sized> CatalogProvider for Arc<P> {
  async fn list_products(&self) -> StorefrontResult<Vec<Product>> {
    (**self).list_products().await
  }

  async fn get_product(&self, id: u64) -> StorefrontResult<Product> {
    (**self).get_product(id).await
  }

  async fn list_categories(&self) -> StorefrontResult<Vec<String>> {
    (**self).list_categories().await
  }
}

// --- Static Catalog ---

/// Serves a fixed product list. Categories are the distinct product categories
/// in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
  products: Arc<Vec<Product>>,
}

impl StaticCatalog {
  pub fn new(products: Vec<Product>) -> Self {
    Self {
      products: Arc::new(products),
    }
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
  async fn list_products(&self) -> StorefrontResult<Vec<Product>> {
    Ok(self.products.as_ref().clone())
  }

  async fn get_product(&self, id: u64) -> StorefrontResult<Product> {
    self.products.iter().find(|p| p.id == id).cloned().ok_or_else(|| {
      event!(Level::DEBUG, product_id = id, "Static catalog has no such product.");
      StorefrontError::NotFound { id }
    })
  }

  async fn list_categories(&self) -> StorefrontResult<Vec<String>> {
    let mut categories: Vec<String> = Vec::new();
    // Uncategorised products do not add an entry to the picker.
    for product in self.products.iter().filter(|p| !p.category.is_empty()) {
      if !categories.iter().any(|c| c == &product.category) {
        categories.push(product.category.clone());
      }
    }
    Ok(categories)
  }
}
