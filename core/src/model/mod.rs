// storefront/src/model/mod.rs

//! Data structures for catalog records and persisted cart/wishlist records.

pub mod cart_line;
pub mod order;
pub mod product;
pub mod wishlist_entry;

pub use cart_line::CartLine;
pub use order::OrderConfirmation;
pub use product::{Product, Rating};
pub use wishlist_entry::WishlistEntry;
