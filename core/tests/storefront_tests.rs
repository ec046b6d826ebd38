// tests/storefront_tests.rs
mod common;

use common::*;
use serial_test::serial;
use std::collections::HashSet;
use storefront::{
  HttpCatalog, MemoryStore, StaticCatalog, Storefront, StorefrontConfig, StorefrontError,
};

fn offline_storefront() -> Storefront<StaticCatalog, MemoryStore> {
  let config = StorefrontConfig::default().with_page_size(2).with_featured_count(3);
  Storefront::new(StaticCatalog::new(sample_products()), MemoryStore::new(), config)
}

#[tokio::test]
#[serial]
async fn listing_loads_products_and_categories() {
  setup_tracing();
  let shop = offline_storefront();
  let listing = shop.load_listing().await.unwrap();
  assert_eq!(listing.products.len(), 5);
  assert_eq!(listing.categories.len(), 3);

  let slice = shop.default_view().apply(&listing.products);
  assert_eq!(slice.items.len(), 2);
  assert_eq!(slice.total_pages, 3);
}

#[tokio::test]
#[serial]
async fn failed_category_fetch_fails_the_whole_listing() {
  setup_tracing();
  let base = spawn_stub_api(vec![
    Route::new("/products", 200, serde_json::to_string(&sample_products()).unwrap()),
    Route::new("/products/categories", 500, ""),
  ])
  .await;
  let shop = Storefront::new(
    HttpCatalog::with_client(direct_client(), base),
    MemoryStore::new(),
    StorefrontConfig::default(),
  );
  let err = shop.load_listing().await.unwrap_err();
  assert_eq!(err.status(), Some(500));
}

#[tokio::test]
#[serial]
async fn featured_products_are_distinct_and_bounded() {
  setup_tracing();
  let shop = offline_storefront();
  let featured = shop.featured_products().await.unwrap();
  assert_eq!(featured.len(), 3);
  let ids: HashSet<u64> = featured.iter().map(|p| p.id).collect();
  assert_eq!(ids.len(), 3);
}

#[tokio::test]
#[serial]
async fn detail_reflects_wishlist_membership_and_badges() {
  setup_tracing();
  let shop = offline_storefront();
  let detail = shop.product_detail(2).await.unwrap();
  assert!(!detail.in_wishlist);

  shop.wishlist().toggle(&detail.product).unwrap();
  assert!(shop.product_detail(2).await.unwrap().in_wishlist);

  shop.cart().add_to_cart(&detail.product, 2).unwrap();
  let badges = shop.badges().unwrap();
  assert_eq!((badges.cart_items, badges.wishlist_items), (2, 1));

  assert!(shop.move_to_cart(2).unwrap());
  let badges = shop.badges().unwrap();
  assert_eq!((badges.cart_items, badges.wishlist_items), (3, 0));
}

#[tokio::test]
#[serial]
async fn missing_product_detail_is_not_found() {
  setup_tracing();
  let shop = offline_storefront();
  assert!(matches!(shop.product_detail(999).await, Err(StorefrontError::NotFound { id: 999 })));
}
