// storefront/src/catalog/http.rs

//! `CatalogProvider` backed by the remote REST API.
//!
//! Endpoints, relative to the base URL:
//!  - `GET /products`            -> array of products
//!  - `GET /products/{id}`       -> single product
//!  - `GET /products/categories` -> array of category names

use super::provider::CatalogProvider;
use crate::config::StorefrontConfig;
use crate::error::{StorefrontError, StorefrontResult};
use crate::model::Product;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{event, instrument, Level};

#[derive(Debug, Clone)]
pub struct HttpCatalog {
  client: Client,
  base_url: String,
}

impl HttpCatalog {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_client(Client::new(), base_url)
  }

  pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { client, base_url }
  }

  pub fn from_config(config: &StorefrontConfig) -> Self {
    Self::new(config.api_base_url.clone())
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  /// Issues one GET and returns the status with the raw body.
  async fn get_raw(&self, url: &str) -> StorefrontResult<(u16, String)> {
    event!(Level::DEBUG, %url, "Fetching from catalog API.");
    let response = self.client.get(url).send().await.map_err(|e| {
      event!(Level::ERROR, %url, error = %e, "Catalog request failed in transport.");
      StorefrontError::from(e)
    })?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok((status, body))
  }

  async fn get_json<T: DeserializeOwned>(&self, url: &str) -> StorefrontResult<T> {
    let (status, body) = self.get_raw(url).await?;
    ensure_success(url, status)?;
    decode(url, &body)
  }
}

fn ensure_success(url: &str, status: u16) -> StorefrontResult<()> {
  if (200..300).contains(&status) {
    return Ok(());
  }
  event!(Level::WARN, %url, status, "Catalog API answered with a non-success status.");
  Err(StorefrontError::RemoteFetch {
    url: url.to_string(),
    status: Some(status),
    message: format!("HTTP error! Status: {}", status),
  })
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> StorefrontResult<T> {
  serde_json::from_str(body).map_err(|source| {
    event!(Level::ERROR, %url, error = %source, "Malformed catalog response body.");
    StorefrontError::Decode {
      url: url.to_string(),
      source,
    }
  })
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
  #[instrument(name = "HttpCatalog::list_products", skip(self), fields(base_url = %self.base_url), err(Display))]
  async fn list_products(&self) -> StorefrontResult<Vec<Product>> {
    let products: Vec<Product> = self.get_json(&self.url("/products")).await?;
    event!(Level::INFO, count = products.len(), "Products fetched.");
    Ok(products)
  }

  #[instrument(name = "HttpCatalog::get_product", skip(self), fields(base_url = %self.base_url), err(Display))]
  async fn get_product(&self, id: u64) -> StorefrontResult<Product> {
    let url = self.url(&format!("/products/{}", id));
    let (status, body) = self.get_raw(&url).await?;
    if status == 404 {
      return Err(StorefrontError::NotFound { id });
    }
    ensure_success(&url, status)?;

    // The public API answers unknown ids with 200 and an empty body.
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
      event!(Level::WARN, product_id = id, "Catalog API returned no product.");
      return Err(StorefrontError::NotFound { id });
    }
    decode(&url, trimmed)
  }

  #[instrument(name = "HttpCatalog::list_categories", skip(self), fields(base_url = %self.base_url), err(Display))]
  async fn list_categories(&self) -> StorefrontResult<Vec<String>> {
    self.get_json(&self.url("/products/categories")).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trailing_slash_is_dropped_from_base_url() {
    let catalog = HttpCatalog::new("http://localhost:9999/");
    assert_eq!(catalog.url("/products"), "http://localhost:9999/products");
  }

  #[test]
  fn non_success_status_is_a_remote_fetch_error() {
    let err = ensure_success("http://x/products", 503).unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(ensure_success("http://x/products", 204).is_ok());
  }
}
