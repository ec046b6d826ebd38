// storefront_cli/src/cli.rs

use crate::config::AppConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse the catalog and manage your cart and wishlist")]
pub struct Cli {
  /// Print raw JSON instead of tables.
  #[arg(long, global = true)]
  pub json: bool,

  /// Catalog API base URL (overrides STOREFRONT_API_URL).
  #[arg(long, global = true)]
  pub api_url: Option<String>,

  /// Directory holding cart.json and wishlist.json (overrides STOREFRONT_DATA_DIR).
  #[arg(long, global = true)]
  pub data_dir: Option<PathBuf>,

  /// Use the bundled sample catalog instead of the API.
  #[arg(long, global = true)]
  pub offline: bool,

  /// Treat unreadable stored lists as empty instead of failing.
  #[arg(long, global = true)]
  pub lenient_storage: bool,

  #[command(subcommand)]
  pub command: Command,
}

impl Cli {
  /// Flags win over the environment.
  pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
    if let Some(url) = &self.api_url {
      config.api_base_url = url.clone();
    }
    if let Some(dir) = &self.data_dir {
      config.data_dir = dir.clone();
    }
    if self.offline {
      config.offline = true;
    }
    if self.lenient_storage {
      config.lenient_storage = true;
    }
    if let Command::Products(args) = &self.command {
      if let Some(size) = args.page_size {
        config.page_size = size.max(1);
      }
    }
    if let Command::Featured { count: Some(count) } = &self.command {
      config.featured_count = *count;
    }
    config
  }
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// List products with optional filters.
  Products(ProductsArgs),
  /// Show one product.
  Product { id: u64 },
  /// List categories.
  Categories,
  /// Show a random selection of products.
  Featured {
    #[arg(long)]
    count: Option<usize>,
  },
  /// Manage the cart.
  Cart {
    #[command(subcommand)]
    action: Option<CartAction>,
  },
  /// Manage the wishlist.
  Wishlist {
    #[command(subcommand)]
    action: Option<WishlistAction>,
  },
}

#[derive(Debug, Args)]
pub struct ProductsArgs {
  /// Matches title or description, case-insensitive.
  #[arg(long, default_value = "")]
  pub search: String,

  #[arg(long, default_value = "")]
  pub category: String,

  /// Unparseable values are ignored.
  #[arg(long, default_value = "")]
  pub min_price: String,

  #[arg(long, default_value = "")]
  pub max_price: String,

  /// One of price-asc, price-desc, rating-desc. Anything else sorts by id.
  #[arg(long, default_value = "")]
  pub sort: String,

  #[arg(long, default_value_t = 1)]
  pub page: usize,

  #[arg(long)]
  pub page_size: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum CartAction {
  Show,
  /// Add a product; the quantity is clamped to at least 1.
  Add {
    id: u64,
    #[arg(long, short, default_value = "1")]
    quantity: String,
  },
  /// Change a line's quantity by a signed delta.
  Qty {
    id: u64,
    #[arg(allow_negative_numbers = true)]
    delta: i64,
  },
  Remove { id: u64 },
  Clear,
  Checkout,
}

#[derive(Debug, Subcommand)]
pub enum WishlistAction {
  Show,
  Toggle { id: u64 },
  Remove { id: u64 },
  /// Move an entry into the cart with quantity 1.
  Move { id: u64 },
}
