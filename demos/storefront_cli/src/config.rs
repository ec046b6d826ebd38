// storefront_cli/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use storefront::config::{DEFAULT_API_BASE_URL, DEFAULT_FEATURED_COUNT, DEFAULT_PAGE_SIZE};
use storefront::{CorruptStoragePolicy, StorefrontConfig};

pub const DEFAULT_DATA_DIR: &str = ".storefront";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub api_base_url: String,
  pub data_dir: PathBuf,
  pub page_size: usize,
  pub featured_count: usize,
  pub lenient_storage: bool,
  /// Serve the bundled sample catalog instead of calling the API.
  pub offline: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      data_dir: PathBuf::from(DEFAULT_DATA_DIR),
      page_size: DEFAULT_PAGE_SIZE,
      featured_count: DEFAULT_FEATURED_COUNT,
      lenient_storage: false,
      offline: false,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_vars()
  }

  /// Reads the process environment without touching `.env`.
  pub fn from_vars() -> Result<Self> {
    let defaults = Self::default();
    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let api_base_url = get_env("STOREFRONT_API_URL").unwrap_or(defaults.api_base_url);
    let data_dir = get_env("STOREFRONT_DATA_DIR")
      .map(PathBuf::from)
      .unwrap_or(defaults.data_dir);
    let page_size = parse_var("STOREFRONT_PAGE_SIZE", get_env("STOREFRONT_PAGE_SIZE"), defaults.page_size)?;
    let featured_count = parse_var(
      "STOREFRONT_FEATURED_COUNT",
      get_env("STOREFRONT_FEATURED_COUNT"),
      defaults.featured_count,
    )?;
    let lenient_storage = parse_var(
      "STOREFRONT_LENIENT_STORAGE",
      get_env("STOREFRONT_LENIENT_STORAGE"),
      defaults.lenient_storage,
    )?;
    let offline = parse_var("STOREFRONT_OFFLINE", get_env("STOREFRONT_OFFLINE"), defaults.offline)?;

    if page_size == 0 {
      return Err(AppError::Config("STOREFRONT_PAGE_SIZE must be at least 1".to_string()));
    }

    tracing::debug!(%api_base_url, data_dir = %data_dir.display(), offline, "Application configuration loaded.");

    Ok(Self {
      api_base_url,
      data_dir,
      page_size,
      featured_count,
      lenient_storage,
      offline,
    })
  }

  pub fn storefront_config(&self) -> StorefrontConfig {
    let policy = if self.lenient_storage {
      CorruptStoragePolicy::Lenient
    } else {
      CorruptStoragePolicy::Strict
    };
    StorefrontConfig::default()
      .with_api_base_url(self.api_base_url.clone())
      .with_page_size(self.page_size)
      .with_featured_count(self.featured_count)
      .with_storage_policy(policy)
  }
}

fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match raw {
    None => Ok(default),
    Some(value) => value
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", name, value, e))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  const VARS: [&str; 6] = [
    "STOREFRONT_API_URL",
    "STOREFRONT_DATA_DIR",
    "STOREFRONT_PAGE_SIZE",
    "STOREFRONT_FEATURED_COUNT",
    "STOREFRONT_LENIENT_STORAGE",
    "STOREFRONT_OFFLINE",
  ];

  fn clear_vars() {
    for var in VARS {
      env::remove_var(var);
    }
  }

  #[test]
  #[serial]
  fn unset_environment_yields_defaults() {
    clear_vars();
    let cfg = AppConfig::from_vars().unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.storefront_config().storage_policy, CorruptStoragePolicy::Strict);
  }

  #[test]
  #[serial]
  fn environment_overrides_defaults() {
    clear_vars();
    env::set_var("STOREFRONT_API_URL", "http://localhost:3000");
    env::set_var("STOREFRONT_PAGE_SIZE", "12");
    env::set_var("STOREFRONT_LENIENT_STORAGE", "true");
    env::set_var("STOREFRONT_OFFLINE", "true");

    let cfg = AppConfig::from_vars().unwrap();
    clear_vars();

    assert_eq!(cfg.api_base_url, "http://localhost:3000");
    assert_eq!(cfg.page_size, 12);
    assert!(cfg.offline);
    let lib = cfg.storefront_config();
    assert_eq!(lib.storage_policy, CorruptStoragePolicy::Lenient);
    assert_eq!(lib.page_size, 12);
  }

  #[test]
  #[serial]
  fn invalid_values_are_config_errors() {
    clear_vars();
    env::set_var("STOREFRONT_PAGE_SIZE", "eight");
    let result = AppConfig::from_vars();
    clear_vars();
    assert!(matches!(result, Err(AppError::Config(_))));

    env::set_var("STOREFRONT_PAGE_SIZE", "0");
    let result = AppConfig::from_vars();
    clear_vars();
    assert!(matches!(result, Err(AppError::Config(_))));
  }
}
