// storefront/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
  /// Transport failure or a response status outside the 2xx range.
  #[error("Remote fetch failed for {url} (status: {status:?}): {message}")]
  RemoteFetch {
    url: String,
    status: Option<u16>,
    message: String,
  },

  #[error("Failed to decode response body from {url}. Source: {source}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Persistence failure for key '{key}'. Source: {source}")]
  Persistence {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Product not found: {id}")]
  NotFound { id: u64 },

  #[error("Invalid quantity {quantity} for product {id}: must be at least 1")]
  InvalidQuantity { id: u64, quantity: u32 },
}

impl StorefrontError {
  pub(crate) fn persistence(key: &str, source: impl Into<AnyhowError>) -> Self {
    StorefrontError::Persistence {
      key: key.to_string(),
      source: source.into(),
    }
  }

  /// HTTP status attached to a `RemoteFetch` failure, if one was received.
  pub fn status(&self) -> Option<u16> {
    match self {
      StorefrontError::RemoteFetch { status, .. } => *status,
      _ => None,
    }
  }
}

impl From<reqwest::Error> for StorefrontError {
  fn from(err: reqwest::Error) -> Self {
    StorefrontError::RemoteFetch {
      url: err.url().map(|u| u.to_string()).unwrap_or_default(),
      status: err.status().map(|s| s.as_u16()),
      message: err.to_string(),
    }
  }
}

pub type StorefrontResult<T, E = StorefrontError> = std::result::Result<T, E>;
