// storefront/src/wishlist.rs

//! Wishlist Manager: the only writer of the persisted `wishlist` list.

use crate::cart::CartManager;
use crate::error::StorefrontResult;
use crate::model::{Product, WishlistEntry};
use crate::storage::{KeyValueStore, StorageAdapter, WISHLIST_KEY};
use tracing::{event, instrument, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
  pub added: bool,
}

#[derive(Debug, Clone)]
pub struct WishlistManager<S: KeyValueStore> {
  storage: StorageAdapter<S>,
}

impl<S: KeyValueStore> WishlistManager<S> {
  pub fn new(storage: StorageAdapter<S>) -> Self {
    Self { storage }
  }

  pub fn entries(&self) -> StorefrontResult<Vec<WishlistEntry>> {
    self.storage.load(WISHLIST_KEY)
  }

  fn save(&self, entries: &[WishlistEntry]) -> StorefrontResult<()> {
    self.storage.save(WISHLIST_KEY, entries)
  }

  /// Removes the product when present, appends it otherwise. Calling this
  /// twice restores the previous membership.
  #[instrument(name = "WishlistManager::toggle", skip(self, product), fields(product_id = product.id), err(Display))]
  pub fn toggle(&self, product: &Product) -> StorefrontResult<ToggleOutcome> {
    let mut entries = self.entries()?;
    let outcome = match entries.iter().position(|e| e.id == product.id) {
      Some(index) => {
        entries.remove(index);
        ToggleOutcome { added: false }
      }
      None => {
        entries.push(WishlistEntry::from_product(product));
        ToggleOutcome { added: true }
      }
    };
    self.save(&entries)?;
    event!(Level::DEBUG, added = outcome.added, "Wishlist toggled.");
    Ok(outcome)
  }

  /// Returns whether an entry was removed.
  #[instrument(name = "WishlistManager::remove", skip(self), err(Display))]
  pub fn remove(&self, id: u64) -> StorefrontResult<bool> {
    let mut entries = self.entries()?;
    let before = entries.len();
    entries.retain(|e| e.id != id);
    if entries.len() == before {
      return Ok(false);
    }
    self.save(&entries)?;
    Ok(true)
  }

  pub fn contains(&self, id: u64) -> StorefrontResult<bool> {
    Ok(self.entries()?.iter().any(|e| e.id == id))
  }

  pub fn count(&self) -> StorefrontResult<u64> {
    Ok(self.entries()?.len() as u64)
  }

  /// Adds one of the entry to `cart`, then drops it from the wishlist.
  ///
  /// The two lists are written separately; a failure between the writes leaves
  /// the product in both. Returns `false` when the id is not on the wishlist.
  #[instrument(name = "WishlistManager::move_to_cart", skip(self, cart), err(Display))]
  pub fn move_to_cart<C: KeyValueStore>(&self, id: u64, cart: &CartManager<C>) -> StorefrontResult<bool> {
    let Some(entry) = self.entries()?.into_iter().find(|e| e.id == id) else {
      event!(Level::DEBUG, product_id = id, "Nothing to move, not on the wishlist.");
      return Ok(false);
    };
    cart.add_line(entry.to_cart_line(1))?;
    self.remove(id)?;
    Ok(true)
  }
}
