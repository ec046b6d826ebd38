// storefront/src/query/featured.rs

use crate::model::Product;
use rand::seq::SliceRandom;
use rand::Rng;

/// Up to `count` distinct products chosen at random, for the home page.
pub fn featured(products: &[Product], count: usize) -> Vec<Product> {
  featured_with_rng(products, count, &mut rand::thread_rng())
}

pub fn featured_with_rng<R: Rng + ?Sized>(products: &[Product], count: usize, rng: &mut R) -> Vec<Product> {
  products.choose_multiple(rng, count).cloned().collect()
}
