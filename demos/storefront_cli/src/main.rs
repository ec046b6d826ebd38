// storefront_cli/src/main.rs

mod cli;
mod config;
mod errors;
mod offline;
mod render;

use crate::cli::{CartAction, Cli, Command, ProductsArgs, WishlistAction};
use crate::config::AppConfig;
use crate::errors::Result as AppResult;

use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::process::ExitCode;
use std::sync::Arc;
use storefront::{
  clamp_quantity_input, CatalogProvider, FileStore, FilterSpec, HttpCatalog, QuantityChange, Storefront,
};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

type Shop = Storefront<Arc<dyn CatalogProvider>, FileStore>;

#[tokio::main]
async fn main() -> ExitCode {
  // Logs go to stderr so stdout carries only command output.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cli.apply_overrides(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      eprintln!("{}", e.banner());
      return e.exit_code();
    }
  };

  match run(&cli, &app_config).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!(application_error = %e, "Command failed.");
      eprintln!("{}", e.banner());
      e.exit_code()
    }
  }
}

fn build_shop(config: &AppConfig) -> AppResult<Shop> {
  let catalog: Arc<dyn CatalogProvider> = if config.offline {
    Arc::new(offline::sample_catalog()?)
  } else {
    Arc::new(HttpCatalog::new(config.api_base_url.clone()))
  };
  let store = FileStore::new(config.data_dir.clone());
  tracing::info!(offline = config.offline, data_dir = %config.data_dir.display(), "Storefront ready.");
  Ok(Storefront::new(catalog, store, config.storefront_config()))
}

/// Prints `value` as JSON, or the text rendering followed by the badge header.
fn emit<T: Serialize>(shop: &Shop, as_json: bool, value: &T, text: String) -> AppResult<()> {
  if as_json {
    println!("{}", serde_json::to_string_pretty(value)?);
    return Ok(());
  }
  print!("{}", text);
  println!("\n{}", render::header(&shop.badges()?));
  Ok(())
}

async fn run(cli: &Cli, config: &AppConfig) -> AppResult<()> {
  let shop = build_shop(config)?;
  match &cli.command {
    Command::Products(args) => products(&shop, cli.json, args).await,
    Command::Product { id } => {
      let detail = shop.product_detail(*id).await?;
      emit(&shop, cli.json, &detail, render::detail(&detail))
    }
    Command::Categories => {
      let categories = shop.catalog().list_categories().await?;
      emit(&shop, cli.json, &categories, render::categories(&categories))
    }
    Command::Featured { .. } => {
      let featured = shop.featured_products().await?;
      emit(&shop, cli.json, &featured, render::product_table(&featured))
    }
    Command::Cart { action } => cart(&shop, cli.json, action.as_ref().unwrap_or(&CartAction::Show)).await,
    Command::Wishlist { action } => {
      wishlist(&shop, cli.json, action.as_ref().unwrap_or(&WishlistAction::Show)).await
    }
  }
}

async fn products(shop: &Shop, as_json: bool, args: &ProductsArgs) -> AppResult<()> {
  // No partial listing: a failed category fetch fails the whole command.
  let listing = shop.load_listing().await?;
  let filter = FilterSpec::from_inputs(&args.search, &args.category, &args.min_price, &args.max_price, &args.sort);
  let view = shop.default_view().with_filter(filter).with_page(args.page);
  let slice = view.apply(&listing.products);
  tracing::debug!(page = slice.page, shown = slice.items.len(), total = slice.total_items, "Listing derived.");
  emit(shop, as_json, &slice, render::listing(&slice))
}

async fn cart(shop: &Shop, as_json: bool, action: &CartAction) -> AppResult<()> {
  let cart = shop.cart();
  let notice = match action {
    CartAction::Show => String::new(),
    CartAction::Add { id, quantity } => {
      let product = shop.catalog().get_product(*id).await?;
      let line = cart.add_to_cart(&product, clamp_quantity_input(quantity))?;
      format!("Added {} to cart (now {}).\n", product.title, line.quantity)
    }
    CartAction::Qty { id, delta } => match cart.change_quantity(*id, *delta)? {
      QuantityChange::Updated(quantity) => format!("Quantity for {} is now {}.\n", id, quantity),
      QuantityChange::Removed => format!("Removed {} from cart.\n", id),
      QuantityChange::Missing => format!("Product {} is not in your cart.\n", id),
    },
    CartAction::Remove { id } => match cart.remove_from_cart(*id)? {
      Some(line) => format!("Removed {} from cart.\n", line.title),
      None => format!("Product {} is not in your cart.\n", id),
    },
    CartAction::Clear => {
      cart.clear_cart()?;
      "Cart cleared.\n".to_string()
    }
    CartAction::Checkout => {
      return match cart.checkout()? {
        Some(order) => emit(shop, as_json, &order, render::receipt(&order)),
        None => emit(
          shop,
          as_json,
          &json!({ "order": null }),
          "Your cart is empty. Nothing to check out.\n".to_string(),
        ),
      };
    }
  };

  let lines = cart.lines()?;
  let subtotal = cart.subtotal()?;
  let value = json!({ "lines": lines, "subtotal": subtotal, "item_count": cart.item_count()? });
  emit(shop, as_json, &value, format!("{}{}", notice, render::cart(&lines, subtotal)))
}

async fn wishlist(shop: &Shop, as_json: bool, action: &WishlistAction) -> AppResult<()> {
  let wishlist = shop.wishlist();
  let notice = match action {
    WishlistAction::Show => String::new(),
    WishlistAction::Toggle { id } => {
      let product = shop.catalog().get_product(*id).await?;
      if wishlist.toggle(&product)?.added {
        format!("Added {} to wishlist.\n", product.title)
      } else {
        format!("Removed {} from wishlist.\n", product.title)
      }
    }
    WishlistAction::Remove { id } => {
      if wishlist.remove(*id)? {
        format!("Removed {} from wishlist.\n", id)
      } else {
        format!("Product {} is not in your wishlist.\n", id)
      }
    }
    WishlistAction::Move { id } => {
      if shop.move_to_cart(*id)? {
        format!("Moved {} to cart.\n", id)
      } else {
        format!("Product {} is not in your wishlist.\n", id)
      }
    }
  };

  let entries = wishlist.entries()?;
  let value = json!({ "entries": entries, "count": entries.len() });
  emit(shop, as_json, &value, format!("{}{}", notice, render::wishlist(&entries)))
}
