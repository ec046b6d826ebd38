// storefront/src/model/cart_line.rs

use super::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
  pub id: u64,
  pub title: String,
  pub price: f64,
  #[serde(default)]
  pub image: String,
  // Lines written by older detail pages carry no category.
  #[serde(default)]
  pub category: String,
  pub quantity: u32,
}

impl CartLine {
  pub fn from_product(product: &Product, quantity: u32) -> Self {
    Self {
      id: product.id,
      title: product.title.clone(),
      price: product.price,
      image: product.image.clone(),
      category: product.category.clone(),
      quantity,
    }
  }

  pub fn line_total(&self) -> f64 {
    self.price * f64::from(self.quantity)
  }
}
