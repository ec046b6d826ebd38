// storefront/src/query/sort.rs

use crate::model::Product;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
  PriceAsc,
  PriceDesc,
  RatingDesc,
  #[default]
  IdAsc,
}

impl SortKey {
  /// Accepts the listing page's option values; anything else is `IdAsc`.
  pub fn parse(raw: &str) -> Self {
    match raw.trim() {
      "price-asc" => SortKey::PriceAsc,
      "price-desc" => SortKey::PriceDesc,
      "rating-desc" => SortKey::RatingDesc,
      _ => SortKey::IdAsc,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SortKey::PriceAsc => "price-asc",
      SortKey::PriceDesc => "price-desc",
      SortKey::RatingDesc => "rating-desc",
      SortKey::IdAsc => "default",
    }
  }

  fn compare(&self, a: &Product, b: &Product) -> Ordering {
    match self {
      SortKey::PriceAsc => a.price.total_cmp(&b.price),
      SortKey::PriceDesc => b.price.total_cmp(&a.price),
      SortKey::RatingDesc => b.rating.rate.total_cmp(&a.rating.rate),
      SortKey::IdAsc => a.id.cmp(&b.id),
    }
  }
}

/// Stable: equal keys keep their input order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
  products.sort_by(|a, b| key.compare(a, b));
}
