// storefront/src/lib.rs

//! Storefront: client-side catalog, cart and wishlist state for a shop backed
//! by a public REST catalog API.
//!
//!  - `catalog`: fetch products, a single product, and categories.
//!  - `query`: pure filtering, stable sorting and pagination over fetched products.
//!  - `cart` / `wishlist`: the only writers of the persisted lists.
//!  - `storage`: whole-list JSON persistence over a key-value substrate.
//!  - `format`: display helpers shared by every presentation.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod query;
pub mod storage;
pub mod storefront;
pub mod wishlist;

// --- Re-exports for the Public API ---

pub use crate::cart::{clamp_quantity_input, CartManager, QuantityChange};
pub use crate::catalog::{CatalogProvider, HttpCatalog, StaticCatalog};
pub use crate::config::StorefrontConfig;
pub use crate::error::{StorefrontError, StorefrontResult};
pub use crate::model::{CartLine, OrderConfirmation, Product, Rating, WishlistEntry};
pub use crate::query::{CatalogView, FilterSpec, PageRequest, PageSlice, PageWindow, SortKey};
pub use crate::storage::{CorruptStoragePolicy, FileStore, KeyValueStore, MemoryStore, StorageAdapter};
pub use crate::storefront::{Badges, Listing, ProductDetail, Storefront};
pub use crate::wishlist::{ToggleOutcome, WishlistManager};
