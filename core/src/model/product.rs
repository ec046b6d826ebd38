// storefront/src/model/product.rs

use serde::{Deserialize, Serialize};

/// A catalog record as served by the remote API. Field names match the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: u64,
  pub title: String,
  pub price: f64,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub category: String,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
  pub rate: f64,
  pub count: u64,
}

impl Product {
  pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
    Self {
      id,
      title: title.into(),
      price,
      description: String::new(),
      category: String::new(),
      image: String::new(),
      rating: Rating::default(),
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = category.into();
    self
  }

  pub fn with_image(mut self, image: impl Into<String>) -> Self {
    self.image = image.into();
    self
  }

  pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
    self.rating = Rating { rate, count };
    self
  }
}
