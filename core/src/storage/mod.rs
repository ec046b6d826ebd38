// storefront/src/storage/mod.rs

//! Persistence for the cart and wishlist lists: a key-value substrate plus a
//! JSON adapter that reads and rewrites whole lists.

pub mod adapter;
pub mod store;

pub use adapter::{CorruptStoragePolicy, StorageAdapter};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Slot holding the JSON array of cart lines.
pub const CART_KEY: &str = "cart";
/// Slot holding the JSON array of wishlist entries.
pub const WISHLIST_KEY: &str = "wishlist";
