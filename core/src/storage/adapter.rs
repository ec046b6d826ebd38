// storefront/src/storage/adapter.rs

//! JSON list persistence atop a `KeyValueStore`.

use super::store::KeyValueStore;
use crate::error::{StorefrontError, StorefrontResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{event, instrument, Level};

/// What `load` does when a stored value does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptStoragePolicy {
  /// Surface `StorefrontError::Persistence`.
  #[default]
  Strict,
  /// Log a warning and treat the slot as empty. The bad value stays in place
  /// until the next successful save overwrites it.
  Lenient,
}

/// Reads and writes whole JSON arrays under fixed keys.
#[derive(Debug, Clone)]
pub struct StorageAdapter<S: KeyValueStore> {
  store: S,
  policy: CorruptStoragePolicy,
}

impl<S: KeyValueStore> StorageAdapter<S> {
  pub fn new(store: S) -> Self {
    Self {
      store,
      policy: CorruptStoragePolicy::default(),
    }
  }

  pub fn with_policy(store: S, policy: CorruptStoragePolicy) -> Self {
    Self { store, policy }
  }

  pub fn policy(&self) -> CorruptStoragePolicy {
    self.policy
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Absent keys load as an empty list.
  #[instrument(name = "StorageAdapter::load", skip(self), fields(policy = ?self.policy), err(Display))]
  pub fn load<T: DeserializeOwned>(&self, key: &str) -> StorefrontResult<Vec<T>> {
    let raw = match self.store.get(key)? {
      Some(raw) => raw,
      None => {
        event!(Level::TRACE, "Key absent, loading empty list.");
        return Ok(Vec::new());
      }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
      Ok(items) => {
        event!(Level::TRACE, items = items.len(), "List loaded.");
        Ok(items)
      }
      Err(e) => match self.policy {
        CorruptStoragePolicy::Strict => {
          event!(Level::ERROR, error = %e, "Stored list is corrupt.");
          Err(StorefrontError::persistence(key, e))
        }
        CorruptStoragePolicy::Lenient => {
          event!(Level::WARN, error = %e, "Stored list is corrupt, treating as empty.");
          Ok(Vec::new())
        }
      },
    }
  }

  /// Overwrites the entire value under `key`.
  #[instrument(name = "StorageAdapter::save", skip(self, items), fields(items = items.len()), err(Display))]
  pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> StorefrontResult<()> {
    let raw = serde_json::to_string(items).map_err(|e| StorefrontError::persistence(key, e))?;
    self.store.set(key, &raw)
  }
}
