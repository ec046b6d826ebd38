// storefront/src/storage/store.rs

//! Key-value substrates. Values are opaque strings; the adapter owns the JSON.

use crate::error::{StorefrontError, StorefrontResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{event, Level};

/// A string-keyed, string-valued store with whole-value semantics.
///
/// Writers are last-write-wins: there is no merge and no change notification.
pub trait KeyValueStore: Send + Sync {
  fn get(&self, key: &str) -> StorefrontResult<Option<String>>;
  fn set(&self, key: &str, value: &str) -> StorefrontResult<()>;
  fn remove(&self, key: &str) -> StorefrontResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
  fn get(&self, key: &str) -> StorefrontResult<Option<String>> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> StorefrontResult<()> {
    (**self).set(key, value)
  }

  fn remove(&self, key: &str) -> StorefrontResult<()> {
    (**self).remove(key)
  }
}

/// In-process store. Clones share the same map, so two handles behave like two
/// pages reading one origin's storage.
#[derive(Debug, Default)]
pub struct MemoryStore(Arc<RwLock<HashMap<String, String>>>);

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.read().is_empty()
  }
}

impl Clone for MemoryStore {
  fn clone(&self) -> Self {
    MemoryStore(Arc::clone(&self.0))
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> StorefrontResult<Option<String>> {
    Ok(self.0.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> StorefrontResult<()> {
    self.0.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> StorefrontResult<()> {
    self.0.write().remove(key);
    Ok(())
  }
}

/// One `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
  root: PathBuf,
}

impl FileStore {
  /// The directory is created lazily on first write.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.root.join(format!("{}.json", key))
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> StorefrontResult<Option<String>> {
    let path = self.path_for(key);
    match fs::read_to_string(&path) {
      Ok(contents) => Ok(Some(contents)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => {
        event!(Level::ERROR, path = %path.display(), error = %e, "Failed to read storage file.");
        Err(StorefrontError::persistence(key, e))
      }
    }
  }

  fn set(&self, key: &str, value: &str) -> StorefrontResult<()> {
    fs::create_dir_all(&self.root).map_err(|e| StorefrontError::persistence(key, e))?;
    let path = self.path_for(key);
    // Each write stages its own temp file in the same directory, then renames
    // it over the target. Concurrent writers never share a staging file.
    let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| StorefrontError::persistence(key, e))?;
    tmp
      .write_all(value.as_bytes())
      .and_then(|()| tmp.as_file().sync_all())
      .map_err(|e| StorefrontError::persistence(key, e))?;
    tmp.persist(&path).map_err(|e| StorefrontError::persistence(key, e.error))?;
    event!(Level::TRACE, path = %path.display(), bytes = value.len(), "Storage file written.");
    Ok(())
  }

  fn remove(&self, key: &str) -> StorefrontResult<()> {
    match fs::remove_file(self.path_for(key)) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(StorefrontError::persistence(key, e)),
    }
  }
}
