// storefront/src/config.rs

//! Library-level configuration. Binaries layer environment variables and
//! command-line flags on top of these defaults.

use crate::storage::CorruptStoragePolicy;

pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_FEATURED_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
  pub api_base_url: String,
  pub page_size: usize,
  pub featured_count: usize,
  pub storage_policy: CorruptStoragePolicy,
}

impl Default for StorefrontConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      page_size: DEFAULT_PAGE_SIZE,
      featured_count: DEFAULT_FEATURED_COUNT,
      storage_policy: CorruptStoragePolicy::Strict,
    }
  }
}

impl StorefrontConfig {
  pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
    self.api_base_url = url.into();
    self
  }

  /// A page size of zero is stored as one.
  pub fn with_page_size(mut self, page_size: usize) -> Self {
    self.page_size = page_size.max(1);
    self
  }

  pub fn with_featured_count(mut self, count: usize) -> Self {
    self.featured_count = count;
    self
  }

  pub fn with_storage_policy(mut self, policy: CorruptStoragePolicy) -> Self {
    self.storage_policy = policy;
    self
  }
}
