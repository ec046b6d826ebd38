// storefront/src/query/paginate.rs

use serde::Serialize;

/// Most page numbers a pagination bar shows at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  pub page: usize,
  pub page_size: usize,
}

impl PageRequest {
  /// A page size of zero is treated as one.
  pub fn new(page: usize, page_size: usize) -> Self {
    Self {
      page,
      page_size: page_size.max(1),
    }
  }

  pub fn first(page_size: usize) -> Self {
    Self::new(1, page_size)
  }
}

/// One page of a filtered, sorted sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSlice<T> {
  pub items: Vec<T>,
  pub page: usize,
  pub page_size: usize,
  pub total_items: usize,
  pub total_pages: usize,
}

impl<T> PageSlice<T> {
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// "Showing X of Y products"; `Y` is the whole filtered count.
  pub fn summary(&self) -> String {
    if self.total_items == 0 {
      return "Showing 0 products".to_string();
    }
    format!("Showing {} of {} products", self.items.len(), self.total_items)
  }

  pub fn window(&self) -> PageWindow {
    PageWindow::around(self.page, self.total_pages)
  }
}

/// Slices `items` for the requested page. Out-of-range pages, including page
/// 0, produce an empty slice rather than an error.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> PageSlice<T> {
  let page_size = request.page_size.max(1);
  let total_items = items.len();
  let total_pages = total_items.div_ceil(page_size);

  let slice = if request.page == 0 || request.page > total_pages {
    Vec::new()
  } else {
    let start = (request.page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    items[start..end].to_vec()
  };

  PageSlice {
    items: slice,
    page: request.page,
    page_size,
    total_items,
    total_pages,
  }
}

/// Contiguous run of page numbers for a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
  pub start: usize,
  pub end: usize,
  pub current: usize,
  pub total_pages: usize,
}

impl PageWindow {
  /// Centres up to `MAX_VISIBLE_PAGES` numbers on `current`, shifted to stay in
  /// `[1, total_pages]`. With no pages the window is empty (`start > end`).
  /// A `current` past the last page positions the window as if on the last page.
  pub fn around(current: usize, total_pages: usize) -> Self {
    let anchor = current.min(total_pages.max(1));
    let mut start = anchor.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = start.saturating_add(MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end.saturating_add(1) < start.saturating_add(MAX_VISIBLE_PAGES) {
      start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }
    Self {
      start,
      end,
      current,
      total_pages,
    }
  }

  pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
    self.start..=self.end
  }

  pub fn has_previous(&self) -> bool {
    self.current > 1
  }

  pub fn has_next(&self) -> bool {
    self.current < self.total_pages
  }
}
