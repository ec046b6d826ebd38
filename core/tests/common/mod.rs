// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use once_cell::sync::Lazy;
use storefront::{CorruptStoragePolicy, MemoryStore, Product, StorageAdapter};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::Level;

// --- Fixtures ---

pub fn product(id: u64, price: f64) -> Product {
  Product::new(id, format!("Product {}", id), price)
}

/// Five products across three categories, in id order.
pub fn sample_products() -> Vec<Product> {
  vec![
    Product::new(1, "Fjallraven Foldsack Backpack", 109.95)
      .with_description("Your perfect pack for everyday use and walks in the forest.")
      .with_category("men's clothing")
      .with_rating(3.9, 120),
    Product::new(2, "Mens Casual Premium Slim Fit T-Shirts", 22.3)
      .with_description("Slim-fitting style, contrast raglan long sleeve.")
      .with_category("men's clothing")
      .with_rating(4.1, 259),
    Product::new(3, "John Hardy Chain Bracelet", 695.0)
      .with_description("From our Legends Collection, inspired by the mythical water dragon.")
      .with_category("jewelery")
      .with_rating(4.6, 400),
    Product::new(4, "Solid Gold Petite Micropave", 168.0)
      .with_description("Satisfaction guaranteed. Return or exchange any order within 30 days.")
      .with_category("jewelery")
      .with_rating(3.9, 70),
    Product::new(5, "WD 2TB Elements Portable External Hard Drive", 64.0)
      .with_description("USB 3.0 and USB 2.0 compatibility, fast data transfers.")
      .with_category("electronics")
      .with_rating(3.3, 203),
  ]
}

pub fn memory_adapter() -> (MemoryStore, StorageAdapter<MemoryStore>) {
  let store = MemoryStore::new();
  (store.clone(), StorageAdapter::new(store))
}

pub fn lenient_adapter(store: MemoryStore) -> StorageAdapter<MemoryStore> {
  StorageAdapter::with_policy(store, CorruptStoragePolicy::Lenient)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Stub catalog API ---

/// A canned response for one request path.
#[derive(Clone, Debug)]
pub struct Route {
  pub path: &'static str,
  pub status: u16,
  pub body: String,
}

impl Route {
  pub fn new(path: &'static str, status: u16, body: impl Into<String>) -> Self {
    Self {
      path,
      status,
      body: body.into(),
    }
  }
}

fn reason(status: u16) -> &'static str {
  match status {
    200 => "OK",
    404 => "Not Found",
    500 => "Internal Server Error",
    503 => "Service Unavailable",
    _ => "Status",
  }
}

/// Serves `routes` on an ephemeral local port until the test runtime ends.
/// Unknown paths answer 404. Returns the base URL.
pub async fn spawn_stub_api(routes: Vec<Route>) -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();

  tokio::spawn(async move {
    while let Ok((mut socket, _)) = listener.accept().await {
      let routes = routes.clone();
      tokio::spawn(async move {
        let mut buf = vec![0u8; 8192];
        let mut read = 0;
        loop {
          let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
          if n == 0 {
            break;
          }
          read += n;
          if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") || read == buf.len() {
            break;
          }
        }
        let request = String::from_utf8_lossy(&buf[..read]).to_string();
        let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
        let (status, body) = routes
          .iter()
          .find(|r| r.path == path)
          .map(|r| (r.status, r.body.clone()))
          .unwrap_or((404, String::new()));
        let response = format!(
          "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
          status,
          reason(status),
          body.len(),
          body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
      });
    }
  });

  format!("http://{}", addr)
}

/// A client that ignores proxy environment variables, so requests reach the stub.
pub fn direct_client() -> reqwest::Client {
  reqwest::Client::builder().no_proxy().build().unwrap()
}
