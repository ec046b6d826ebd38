// storefront/src/query/view.rs

//! Explicit listing state. A `CatalogView` is a value: callers keep it between
//! interactions and derive page slices from it together with the product list.

use super::filter::{filter_products, FilterSpec};
use super::paginate::{paginate, PageRequest, PageSlice};
use crate::model::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
  pub filter: FilterSpec,
  pub page: PageRequest,
}

impl CatalogView {
  pub fn new(page_size: usize) -> Self {
    Self {
      filter: FilterSpec::default(),
      page: PageRequest::first(page_size),
    }
  }

  /// Replaces the filter. Re-filtering always goes back to page 1.
  pub fn with_filter(&self, filter: FilterSpec) -> Self {
    Self {
      filter,
      page: PageRequest::first(self.page.page_size),
    }
  }

  pub fn with_page(&self, page: usize) -> Self {
    Self {
      filter: self.filter.clone(),
      page: PageRequest::new(page, self.page.page_size),
    }
  }

  /// Filters, sorts and slices `products` for this view.
  pub fn apply(&self, products: &[Product]) -> PageSlice<Product> {
    let matched = filter_products(products, &self.filter);
    paginate(&matched, self.page)
  }
}
