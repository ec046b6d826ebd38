// storefront_cli/src/render.rs

//! Plain-text rendering of library values. Every function returns a `String`
//! so `main` decides where output goes.

use std::fmt::Write;
use storefront::format::{badge_label, category_label, format_price, truncate_text, StarRating};
use storefront::{Badges, CartLine, OrderConfirmation, PageSlice, PageWindow, Product, ProductDetail, WishlistEntry};

const TITLE_WIDTH: usize = 40;
const DESCRIPTION_WIDTH: usize = 100;

pub fn header(badges: &Badges) -> String {
  let cart = badge_label(badges.cart_items).map(|b| format!(" ({})", b)).unwrap_or_default();
  let wishlist = badge_label(badges.wishlist_items).map(|b| format!(" ({})", b)).unwrap_or_default();
  format!("Cart{} | Wishlist{}", cart, wishlist)
}

fn product_row(out: &mut String, product: &Product) {
  let _ = writeln!(
    out,
    "{:>4}  {:<43}  {:>9}  {}  {}",
    product.id,
    truncate_text(&product.title, TITLE_WIDTH),
    format_price(product.price),
    StarRating::from_rate(product.rating.rate).render(),
    category_label(&product.category),
  );
}

pub fn product_table(products: &[Product]) -> String {
  let mut out = String::new();
  for product in products {
    product_row(&mut out, product);
  }
  out
}

/// The pagination bar: `« 1 [2] 3 4 5 »`, arrows only when there is somewhere to go.
pub fn page_bar(window: &PageWindow) -> String {
  if window.total_pages == 0 {
    return String::new();
  }
  let mut parts = Vec::new();
  if window.has_previous() {
    parts.push("«".to_string());
  }
  for page in window.pages() {
    if page == window.current {
      parts.push(format!("[{}]", page));
    } else {
      parts.push(page.to_string());
    }
  }
  if window.has_next() {
    parts.push("»".to_string());
  }
  parts.join(" ")
}

pub fn listing(slice: &PageSlice<Product>) -> String {
  if slice.is_empty() {
    return format!("No products found.\n{}\n", slice.summary());
  }
  let mut out = product_table(&slice.items);
  let _ = writeln!(out, "{}", slice.summary());
  let bar = page_bar(&slice.window());
  if !bar.is_empty() {
    let _ = writeln!(out, "{}", bar);
  }
  out
}

pub fn detail(detail: &ProductDetail) -> String {
  let product = &detail.product;
  let stars = StarRating::from_rate(product.rating.rate);
  let mut out = String::new();
  let _ = writeln!(out, "{}", product.title);
  let _ = writeln!(out, "{}  |  {}", format_price(product.price), category_label(&product.category));
  let _ = writeln!(out, "{} ({} reviews)", stars.render(), product.rating.count);
  let _ = writeln!(out, "{}", truncate_text(&product.description, DESCRIPTION_WIDTH));
  let marker = if detail.in_wishlist { "In your wishlist" } else { "Not in your wishlist" };
  let _ = writeln!(out, "{}", marker);
  out
}

pub fn categories(categories: &[String]) -> String {
  let mut out = String::new();
  for category in categories {
    let _ = writeln!(out, "{:<20} (--category \"{}\")", category_label(category), category);
  }
  out
}

pub fn cart(lines: &[CartLine], subtotal: f64) -> String {
  if lines.is_empty() {
    return "Your cart is empty.\n".to_string();
  }
  let mut out = String::new();
  for line in lines {
    let _ = writeln!(
      out,
      "{:>4}  {:<43}  {:>9} x {:<3} {:>10}",
      line.id,
      truncate_text(&line.title, TITLE_WIDTH),
      format_price(line.price),
      line.quantity,
      format_price(line.line_total()),
    );
  }
  let _ = writeln!(out, "Subtotal: {}", format_price(subtotal));
  let _ = writeln!(out, "Total:    {}", format_price(subtotal));
  out
}

pub fn wishlist(entries: &[WishlistEntry]) -> String {
  if entries.is_empty() {
    return "Your wishlist is empty.\n".to_string();
  }
  let mut out = String::new();
  for entry in entries {
    let _ = writeln!(
      out,
      "{:>4}  {:<43}  {:>9}  {}",
      entry.id,
      truncate_text(&entry.title, TITLE_WIDTH),
      format_price(entry.price),
      category_label(&entry.category),
    );
  }
  out
}

pub fn receipt(order: &OrderConfirmation) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Order placed: {}", order.order_id);
  let _ = writeln!(out, "Placed at:    {}", order.placed_at.to_rfc3339());
  let _ = writeln!(out, "Items:        {}", order.item_count());
  let _ = writeln!(out, "Total:        {}", format_price(order.subtotal));
  out
}
