// storefront/src/model/wishlist_entry.rs

use super::{CartLine, Product};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
  pub id: u64,
  pub title: String,
  pub price: f64,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub category: String,
}

impl WishlistEntry {
  pub fn from_product(product: &Product) -> Self {
    Self {
      id: product.id,
      title: product.title.clone(),
      price: product.price,
      image: product.image.clone(),
      category: product.category.clone(),
    }
  }

  /// Builds the cart line used when the entry is moved to the cart.
  pub fn to_cart_line(&self, quantity: u32) -> CartLine {
    CartLine {
      id: self.id,
      title: self.title.clone(),
      price: self.price,
      image: self.image.clone(),
      category: self.category.clone(),
      quantity,
    }
  }
}
