// storefront/src/query/mod.rs

//! Pure view derivation over an in-memory product list: filtering, sorting,
//! pagination, and featured sampling. Nothing here holds state between calls;
//! the caller owns a `CatalogView` and passes it in.

pub mod featured;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

pub use featured::{featured, featured_with_rng};
pub use filter::{filter_products, parse_price_bound, FilterSpec, PriceRange};
pub use paginate::{paginate, PageRequest, PageSlice, PageWindow, MAX_VISIBLE_PAGES};
pub use sort::{sort_products, SortKey};
pub use view::CatalogView;
