// storefront/src/cart.rs

//! Cart Manager: the only writer of the persisted `cart` list.
//!
//! Every operation reads the whole list, mutates it in memory and writes the
//! whole list back. The list holds at most one line per product id and never a
//! line with a quantity below 1.

use crate::error::{StorefrontError, StorefrontResult};
use crate::model::{CartLine, OrderConfirmation, Product};
use crate::storage::{KeyValueStore, StorageAdapter, CART_KEY};
use chrono::Utc;
use tracing::{event, instrument, Level};
use uuid::Uuid;

/// Result of `CartManager::change_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
  Updated(u32),
  Removed,
  /// No line with that id; nothing was written.
  Missing,
}

#[derive(Debug, Clone)]
pub struct CartManager<S: KeyValueStore> {
  storage: StorageAdapter<S>,
}

impl<S: KeyValueStore> CartManager<S> {
  pub fn new(storage: StorageAdapter<S>) -> Self {
    Self { storage }
  }

  pub fn lines(&self) -> StorefrontResult<Vec<CartLine>> {
    self.storage.load(CART_KEY)
  }

  fn save(&self, lines: &[CartLine]) -> StorefrontResult<()> {
    self.storage.save(CART_KEY, lines)
  }

  /// Adds `quantity` of `product`, merging into an existing line. Returns the
  /// line as persisted.
  #[instrument(name = "CartManager::add_to_cart", skip(self, product), fields(product_id = product.id), err(Display))]
  pub fn add_to_cart(&self, product: &Product, quantity: u32) -> StorefrontResult<CartLine> {
    if quantity == 0 {
      return Err(StorefrontError::InvalidQuantity { id: product.id, quantity });
    }
    self.add_line(CartLine::from_product(product, quantity))
  }

  /// Merges a prepared line into the cart by id.
  pub fn add_line(&self, line: CartLine) -> StorefrontResult<CartLine> {
    if line.quantity == 0 {
      return Err(StorefrontError::InvalidQuantity {
        id: line.id,
        quantity: 0,
      });
    }
    let mut lines = self.lines()?;
    let persisted = match lines.iter_mut().find(|l| l.id == line.id) {
      Some(existing) => {
        existing.quantity = existing.quantity.saturating_add(line.quantity);
        event!(Level::DEBUG, product_id = line.id, quantity = existing.quantity, "Cart line quantity increased.");
        existing.clone()
      }
      None => {
        event!(Level::DEBUG, product_id = line.id, quantity = line.quantity, "Cart line appended.");
        lines.push(line.clone());
        line
      }
    };
    self.save(&lines)?;
    Ok(persisted)
  }

  /// Applies `delta` to a line. A result of zero or less removes the line.
  #[instrument(name = "CartManager::change_quantity", skip(self), err(Display))]
  pub fn change_quantity(&self, id: u64, delta: i64) -> StorefrontResult<QuantityChange> {
    let mut lines = self.lines()?;
    let Some(index) = lines.iter().position(|l| l.id == id) else {
      event!(Level::DEBUG, product_id = id, "No cart line to change.");
      return Ok(QuantityChange::Missing);
    };

    let next = i64::from(lines[index].quantity).saturating_add(delta);
    let change = if next <= 0 {
      lines.remove(index);
      event!(Level::DEBUG, product_id = id, "Cart line removed after quantity change.");
      QuantityChange::Removed
    } else {
      let quantity = u32::try_from(next).unwrap_or(u32::MAX);
      lines[index].quantity = quantity;
      QuantityChange::Updated(quantity)
    };
    self.save(&lines)?;
    Ok(change)
  }

  /// Returns the removed line, or `None` when there was nothing to remove.
  #[instrument(name = "CartManager::remove_from_cart", skip(self), err(Display))]
  pub fn remove_from_cart(&self, id: u64) -> StorefrontResult<Option<CartLine>> {
    let mut lines = self.lines()?;
    let Some(index) = lines.iter().position(|l| l.id == id) else {
      return Ok(None);
    };
    let removed = lines.remove(index);
    self.save(&lines)?;
    Ok(Some(removed))
  }

  pub fn clear_cart(&self) -> StorefrontResult<()> {
    event!(Level::DEBUG, "Clearing cart.");
    self.save(&[])
  }

  /// Sum of `price * quantity`. No tax or shipping.
  pub fn subtotal(&self) -> StorefrontResult<f64> {
    Ok(subtotal_of(&self.lines()?))
  }

  /// Sum of quantities, for the cart badge.
  pub fn item_count(&self) -> StorefrontResult<u64> {
    Ok(self.lines()?.iter().map(|l| u64::from(l.quantity)).sum())
  }

  /// Empties a non-empty cart and returns the receipt. An empty cart is left
  /// alone and yields `None`.
  #[instrument(name = "CartManager::checkout", skip(self), err(Display))]
  pub fn checkout(&self) -> StorefrontResult<Option<OrderConfirmation>> {
    let lines = self.lines()?;
    if lines.is_empty() {
      event!(Level::INFO, "Checkout requested on an empty cart.");
      return Ok(None);
    }
    let confirmation = OrderConfirmation {
      order_id: Uuid::new_v4(),
      placed_at: Utc::now(),
      subtotal: subtotal_of(&lines),
      lines,
    };
    self.clear_cart()?;
    event!(Level::INFO, order_id = %confirmation.order_id, subtotal = confirmation.subtotal, "Order placed.");
    Ok(Some(confirmation))
  }
}

fn subtotal_of(lines: &[CartLine]) -> f64 {
  lines.iter().map(CartLine::line_total).sum()
}

/// Parses a typed quantity; anything unparseable or below 1 becomes 1.
pub fn clamp_quantity_input(raw: &str) -> u32 {
  match raw.trim().parse::<i64>() {
    Ok(v) if v >= 1 => u32::try_from(v).unwrap_or(u32::MAX),
    _ => 1,
  }
}
