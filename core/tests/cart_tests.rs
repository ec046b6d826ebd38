// tests/cart_tests.rs
mod common;

use common::*;
use storefront::storage::CART_KEY;
use storefront::{CartManager, KeyValueStore, MemoryStore, QuantityChange, StorageAdapter, StorefrontError};

fn cart() -> (MemoryStore, CartManager<MemoryStore>) {
  let (store, adapter) = memory_adapter();
  (store, CartManager::new(adapter))
}

#[test]
fn add_change_and_remove_scenario() {
  setup_tracing();
  let (_store, cart) = cart();
  let p = product(1, 10.0);

  cart.add_to_cart(&p, 1).unwrap();
  let lines = cart.lines().unwrap();
  assert_eq!(lines.len(), 1);
  assert_eq!(lines[0].quantity, 1);
  assert_eq!(format!("{:.2}", cart.subtotal().unwrap()), "10.00");

  cart.add_to_cart(&p, 1).unwrap();
  let lines = cart.lines().unwrap();
  assert_eq!(lines.len(), 1, "adding twice must merge into one line");
  assert_eq!(lines[0].quantity, 2);
  assert_eq!(format!("{:.2}", cart.subtotal().unwrap()), "20.00");

  assert_eq!(cart.change_quantity(1, -2).unwrap(), QuantityChange::Removed);
  assert!(cart.lines().unwrap().is_empty());
  assert_eq!(format!("{:.2}", cart.subtotal().unwrap()), "0.00");
}

#[test]
fn add_with_quantity_merges_by_id() {
  setup_tracing();
  let (_store, cart) = cart();
  cart.add_to_cart(&product(1, 2.5), 3).unwrap();
  cart.add_to_cart(&product(2, 1.0), 1).unwrap();
  let merged = cart.add_to_cart(&product(1, 2.5), 4).unwrap();
  assert_eq!(merged.quantity, 7);

  let lines = cart.lines().unwrap();
  assert_eq!(lines.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);
  assert_eq!(cart.item_count().unwrap(), 8);
  assert!((cart.subtotal().unwrap() - 18.5).abs() < 1e-9);
}

#[test]
fn zero_quantity_is_rejected_without_writing() {
  setup_tracing();
  let (store, cart) = cart();
  let err = cart.add_to_cart(&product(1, 1.0), 0).unwrap_err();
  assert!(matches!(err, StorefrontError::InvalidQuantity { id: 1, quantity: 0 }));
  assert_eq!(store.get(CART_KEY).unwrap(), None);
}

#[test]
fn change_quantity_never_persists_non_positive_lines() {
  setup_tracing();
  let (_store, cart) = cart();
  cart.add_to_cart(&product(1, 1.0), 2).unwrap();

  assert_eq!(cart.change_quantity(1, 3).unwrap(), QuantityChange::Updated(5));
  assert_eq!(cart.change_quantity(1, -4).unwrap(), QuantityChange::Updated(1));
  // Overshooting removes rather than clamping to 1.
  assert_eq!(cart.change_quantity(1, -10).unwrap(), QuantityChange::Removed);
  assert!(cart.lines().unwrap().iter().all(|l| l.quantity >= 1));
}

#[test]
fn unknown_ids_are_no_ops() {
  setup_tracing();
  let (store, cart) = cart();
  assert_eq!(cart.change_quantity(42, 1).unwrap(), QuantityChange::Missing);
  assert_eq!(cart.remove_from_cart(42).unwrap(), None);
  assert_eq!(store.get(CART_KEY).unwrap(), None);
}

#[test]
fn remove_returns_the_removed_line() {
  setup_tracing();
  let (_store, cart) = cart();
  cart.add_to_cart(&product(1, 1.0), 1).unwrap();
  cart.add_to_cart(&product(2, 1.0), 1).unwrap();
  let removed = cart.remove_from_cart(1).unwrap().unwrap();
  assert_eq!(removed.id, 1);
  assert_eq!(cart.lines().unwrap().len(), 1);
}

#[test]
fn checkout_clears_and_returns_receipt() {
  setup_tracing();
  let (store, cart) = cart();
  assert!(cart.checkout().unwrap().is_none());
  // An empty cart is not even written.
  assert_eq!(store.get(CART_KEY).unwrap(), None);

  cart.add_to_cart(&product(1, 10.0), 2).unwrap();
  cart.add_to_cart(&product(2, 2.5), 1).unwrap();
  let receipt = cart.checkout().unwrap().unwrap();
  assert_eq!(receipt.lines.len(), 2);
  assert_eq!(receipt.item_count(), 3);
  assert!((receipt.subtotal - 22.5).abs() < 1e-9);

  assert!(cart.lines().unwrap().is_empty());
  assert_eq!(store.get(CART_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn two_handles_on_one_store_see_each_other() {
  setup_tracing();
  let store = MemoryStore::new();
  let tab_a = CartManager::new(StorageAdapter::new(store.clone()));
  let tab_b = CartManager::new(StorageAdapter::new(store));
  tab_a.add_to_cart(&product(1, 1.0), 1).unwrap();
  tab_b.add_to_cart(&product(1, 1.0), 1).unwrap();
  assert_eq!(tab_a.item_count().unwrap(), 2);
}

#[test]
fn clear_cart_empties_the_list() {
  setup_tracing();
  let (_store, cart) = cart();
  cart.add_to_cart(&product(3, 4.0), 2).unwrap();
  cart.clear_cart().unwrap();
  assert_eq!(cart.item_count().unwrap(), 0);
}
