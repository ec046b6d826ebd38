// storefront/src/query/filter.rs

use super::sort::SortKey;
use crate::format::sanitize_input;
use crate::model::Product;

/// Inclusive price bounds. Unset bounds are `[0, +inf]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
  pub min: f64,
  pub max: f64,
}

impl Default for PriceRange {
  fn default() -> Self {
    Self {
      min: 0.0,
      max: f64::INFINITY,
    }
  }
}

impl PriceRange {
  pub fn contains(&self, price: f64) -> bool {
    self.min <= price && price <= self.max
  }
}

/// Search text, category, price bounds and sort order for one listing view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
  /// Already sanitized and lower-cased.
  pub search_text: String,
  /// Empty means any category.
  pub category: String,
  pub price: PriceRange,
  pub sort_key: SortKey,
}

impl FilterSpec {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a filter from raw form inputs. Unparseable prices fall back to the
  /// default bounds and an unknown sort value means `IdAsc`.
  pub fn from_inputs(search: &str, category: &str, min_price: &str, max_price: &str, sort: &str) -> Self {
    Self {
      search_text: normalize_search(search),
      category: category.trim().to_string(),
      price: PriceRange {
        min: parse_price_bound(min_price).unwrap_or(0.0),
        max: parse_price_bound(max_price).unwrap_or(f64::INFINITY),
      },
      sort_key: SortKey::parse(sort),
    }
  }

  /// The input is trimmed, HTML-escaped and lower-cased before matching, so
  /// whitespace-only input matches everything.
  pub fn with_search(mut self, search: &str) -> Self {
    self.search_text = normalize_search(search);
    self
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = category.into();
    self
  }

  pub fn with_min_price(mut self, min: f64) -> Self {
    self.price.min = if min.is_nan() { 0.0 } else { min };
    self
  }

  pub fn with_max_price(mut self, max: f64) -> Self {
    self.price.max = if max.is_nan() { f64::INFINITY } else { max };
    self
  }

  pub fn with_sort(mut self, sort_key: SortKey) -> Self {
    self.sort_key = sort_key;
    self
  }

  fn matches_search(&self, product: &Product) -> bool {
    self.search_text.is_empty()
      || product.title.to_lowercase().contains(&self.search_text)
      || product.description.to_lowercase().contains(&self.search_text)
  }

  fn matches_category(&self, product: &Product) -> bool {
    self.category.is_empty() || product.category == self.category
  }

  /// All three predicates must hold.
  pub fn matches(&self, product: &Product) -> bool {
    self.matches_search(product) && self.matches_category(product) && self.price.contains(product.price)
  }
}

fn normalize_search(raw: &str) -> String {
  sanitize_input(raw.trim()).to_lowercase()
}

/// `None` for blank, non-numeric or NaN input.
pub fn parse_price_bound(raw: &str) -> Option<f64> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  raw.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Filters then sorts. The result preserves input order among equal sort keys.
pub fn filter_products(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
  let mut matched: Vec<Product> = products.iter().filter(|p| spec.matches(p)).cloned().collect();
  super::sort::sort_products(&mut matched, spec.sort_key);
  matched
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn price_bounds_parse_leniently() {
    assert_eq!(parse_price_bound(" 12.5 "), Some(12.5));
    assert_eq!(parse_price_bound(""), None);
    assert_eq!(parse_price_bound("abc"), None);
    assert_eq!(parse_price_bound("NaN"), None);
  }

  #[test]
  fn from_inputs_falls_back_to_defaults() {
    let spec = FilterSpec::from_inputs("  Shirt ", "", "x", "", "bogus");
    assert_eq!(spec.search_text, "shirt");
    assert_eq!(spec.price, PriceRange::default());
    assert_eq!(spec.sort_key, SortKey::IdAsc);
  }

  #[test]
  fn search_text_is_html_escaped_before_matching() {
    let spec = FilterSpec::new().with_search("<b>");
    assert_eq!(spec.search_text, "&lt;b&gt;");
  }
}
