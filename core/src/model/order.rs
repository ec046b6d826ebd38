// storefront/src/model/order.rs

use super::CartLine;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Receipt produced when a non-empty cart is checked out. Nothing is charged.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
  pub order_id: Uuid,
  pub placed_at: DateTime<Utc>,
  pub lines: Vec<CartLine>,
  pub subtotal: f64,
}

impl OrderConfirmation {
  pub fn item_count(&self) -> u64 {
    self.lines.iter().map(|l| u64::from(l.quantity)).sum()
  }
}
