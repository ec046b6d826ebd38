// storefront/src/storefront.rs

//! `Storefront` wires a catalog source and a storage substrate into the
//! managers each page needs. It holds no catalog data itself: callers keep the
//! fetched products and pass them to the query functions.

use crate::cart::CartManager;
use crate::catalog::CatalogProvider;
use crate::config::StorefrontConfig;
use crate::error::StorefrontResult;
use crate::model::Product;
use crate::query::{featured, CatalogView};
use crate::storage::{KeyValueStore, StorageAdapter};
use crate::wishlist::WishlistManager;
use serde::Serialize;
use tracing::{event, instrument, Level};

/// Everything the listing page loads up front.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
  pub products: Vec<Product>,
  pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
  pub product: Product,
  pub in_wishlist: bool,
}

/// Counts shown in the header of every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badges {
  pub cart_items: u64,
  pub wishlist_items: u64,
}

pub struct Storefront<C, S>
where
  C: CatalogProvider,
  S: KeyValueStore + Clone,
{
  catalog: C,
  cart: CartManager<S>,
  wishlist: WishlistManager<S>,
  config: StorefrontConfig,
}

impl<C, S> Storefront<C, S>
where
  C: CatalogProvider,
  S: KeyValueStore + Clone,
{
  pub fn new(catalog: C, store: S, config: StorefrontConfig) -> Self {
    let cart = CartManager::new(StorageAdapter::with_policy(store.clone(), config.storage_policy));
    let wishlist = WishlistManager::new(StorageAdapter::with_policy(store, config.storage_policy));
    Self {
      catalog,
      cart,
      wishlist,
      config,
    }
  }

  pub fn catalog(&self) -> &C {
    &self.catalog
  }

  pub fn cart(&self) -> &CartManager<S> {
    &self.cart
  }

  pub fn wishlist(&self) -> &WishlistManager<S> {
    &self.wishlist
  }

  pub fn config(&self) -> &StorefrontConfig {
    &self.config
  }

  /// A fresh view at page 1 with the configured page size.
  pub fn default_view(&self) -> CatalogView {
    CatalogView::new(self.config.page_size)
  }

  /// Fetches products, then categories. Either failure fails the whole load;
  /// no partial listing is returned.
  #[instrument(name = "Storefront::load_listing", skip(self), err(Display))]
  pub async fn load_listing(&self) -> StorefrontResult<Listing> {
    let products = self.catalog.list_products().await?;
    let categories = self.catalog.list_categories().await?;
    event!(Level::INFO, products = products.len(), categories = categories.len(), "Listing loaded.");
    Ok(Listing { products, categories })
  }

  pub async fn featured_products(&self) -> StorefrontResult<Vec<Product>> {
    let products = self.catalog.list_products().await?;
    Ok(featured(&products, self.config.featured_count))
  }

  #[instrument(name = "Storefront::product_detail", skip(self), err(Display))]
  pub async fn product_detail(&self, id: u64) -> StorefrontResult<ProductDetail> {
    let product = self.catalog.get_product(id).await?;
    let in_wishlist = self.wishlist.contains(product.id)?;
    Ok(ProductDetail { product, in_wishlist })
  }

  pub fn badges(&self) -> StorefrontResult<Badges> {
    Ok(Badges {
      cart_items: self.cart.item_count()?,
      wishlist_items: self.wishlist.count()?,
    })
  }

  pub fn move_to_cart(&self, id: u64) -> StorefrontResult<bool> {
    self.wishlist.move_to_cart(id, &self.cart)
  }
}
