// Demo mode: a local catalog API with a fixed sample inventory
//
// Serves the same two endpoints as a real catalog backend so the TUI and the
// headless commands can be tried without one:
// - GET /products       (query, category, page, limit)
// - GET /products/:id
//
// Run with: listings demo-server, or listings --demo to browse it directly.

use crate::catalog::{Product, ProductPage};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Page size used when a request does not say
const DEFAULT_LIMIT: u32 = 8;

/// Upper bound on page size so a careless client can't ask for everything
const MAX_LIMIT: u32 = 100;

type Catalog = Arc<Vec<Product>>;

/// Query parameters accepted by `GET /products`
#[derive(Debug, Default, Deserialize)]
struct ListParams {
    query: Option<String>,
    category: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
}

fn item(
    id: &str,
    name: &str,
    price: f64,
    category: &str,
    in_stock: bool,
    description: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category: category.to_string(),
        in_stock,
        description: Some(description.to_string()),
        image_url: Some(format!("https://picsum.photos/seed/listing-{}/400/300", id)),
    }
}

/// Sample inventory served in demo mode
#[rustfmt::skip]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        item("1", "Wireless Headphones", 99.99, "Electronics", true, "Over-ear, 30h battery, active noise cancelling."),
        item("2", "Coffee Maker", 79.50, "Home", true, "12-cup drip brewer with a programmable timer."),
        item("3", "Running Shoes", 129.99, "Clothing", false, "Lightweight trainers with a cushioned sole."),
        item("4", "Laptop Stand", 49.99, "Electronics", true, "Aluminium stand with six height settings."),
        item("5", "Yoga Mat", 34.99, "Home", true, "6mm non-slip mat with carry strap."),
        item("6", "Mechanical Keyboard", 149.00, "Electronics", true, "Tenkeyless, hot-swappable switches."),
        item("7", "Desk Lamp", 39.95, "Home", false, "LED lamp with adjustable colour temperature."),
        item("8", "Rain Jacket", 89.00, "Clothing", true, "Packable waterproof shell."),
        item("9", "The Pragmatic Programmer", 42.50, "Books", true, "20th anniversary edition."),
        item("10", "Cast Iron Skillet", 45.00, "Home", true, "Pre-seasoned 12-inch skillet."),
        item("11", "USB-C Hub", 29.99, "Electronics", true, "7-in-1 hub with HDMI and card reader."),
        item("12", "Wool Sweater", 74.00, "Clothing", true, "Merino crew neck."),
        item("13", "Designing Data-Intensive Applications", 55.99, "Books", false, "Reliable, scalable and maintainable systems."),
        item("14", "Bluetooth Speaker", 59.99, "Electronics", true, "Waterproof speaker with 12h playback."),
        item("15", "French Press", 24.99, "Home", true, "1 litre borosilicate glass."),
        item("16", "Denim Jeans", 64.50, "Clothing", false, "Slim fit, stretch denim."),
        item("17", "Rust in Action", 49.99, "Books", true, "Systems programming concepts and techniques."),
        item("18", "Smart Watch", 199.00, "Electronics", true, "Heart rate, GPS and sleep tracking."),
        item("19", "Throw Blanket", 35.00, "Home", true, "Chunky knit, machine washable."),
        item("20", "Baseball Cap", 19.99, "Clothing", true, "Adjustable cotton cap."),
        item("21", "Clean Code", 37.49, "Books", true, "A handbook of agile software craftsmanship."),
    ]
}

/// Build the demo router over a catalog
pub fn router(catalog: Vec<Product>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .with_state(Arc::new(catalog))
}

async fn list_products(
    State(catalog): State<Catalog>,
    Query(params): Query<ListParams>,
) -> Json<ProductPage> {
    let needle = params
        .query
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .to_lowercase();
    let category = params.category.as_deref().unwrap_or("");
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let matching: Vec<&Product> = catalog
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| category.is_empty() || p.category == category)
        .collect();

    let start = (page as usize - 1).saturating_mul(limit as usize);
    let items = matching
        .iter()
        .skip(start)
        .take(limit as usize)
        .map(|p| (*p).clone())
        .collect();

    tracing::debug!(
        query = %needle,
        category,
        page,
        limit,
        matched = matching.len(),
        "Demo list request"
    );

    Json(ProductPage {
        items,
        total: matching.len() as u64,
        page,
        limit,
    })
}

async fn get_product(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Demo server running in the background of this process
pub struct DemoServer {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl DemoServer {
    /// Bind and start serving in a background task
    ///
    /// Bind to port 0 to get an ephemeral port; [`DemoServer::base_url`]
    /// reports the address actually bound.
    pub async fn spawn(bind: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(bind)
            .await
            .with_context(|| format!("Failed to bind demo server to {}", bind))?;
        let addr = listener
            .local_addr()
            .context("Failed to read demo server address")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = router(sample_catalog());

        let handle = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = result {
                tracing::error!("Demo server error: {}", e);
            }
        });

        tracing::info!("Demo catalog listening on {}", addr);

        Ok(Self {
            addr,
            shutdown_tx,
            handle,
        })
    }

    /// Base URL to point a `CatalogClient` at
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for the server task
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.await;
        tracing::debug!("Demo server stopped");
    }
}

/// Serve the demo catalog in the foreground until Ctrl+C
pub async fn serve(bind: SocketAddr) -> Result<()> {
    let server = DemoServer::spawn(bind).await?;
    println!("Demo catalog listening on {}", server.base_url());
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    server.shutdown().await;
    Ok(())
}
