//! HTTP client for the catalog API
//!
//! Thin wrapper around `reqwest::Client` that knows the two endpoints and
//! maps transport/status/decode failures into [`CatalogError`]. The client is
//! cheap to clone (reqwest pools connections behind an Arc), so the TUI
//! clones it into each spawned fetch task.

use super::error::CatalogError;
use super::query::ListQuery;
use super::types::{ListEnvelope, Product, ProductPage};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

const LIST_CONTEXT: &str = "Failed to fetch products";
const DETAIL_CONTEXT: &str = "Failed to load product";

/// Catalog API client
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client for the API rooted at `base_url`
    ///
    /// The base may carry a path prefix (`https://host/api`); endpoint
    /// paths are appended to it.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let parsed =
            Url::parse(base_url).map_err(|e| CatalogError::InvalidUrl(format!("{base_url}: {e}")))?;

        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    /// Base URL the client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one page of products: `GET /products?page=&limit=[&query=][&category=]`
    pub async fn list_products(&self, query: &ListQuery) -> Result<ProductPage, CatalogError> {
        let url = self.products_url(None)?;
        let pairs = query.to_pairs();

        tracing::debug!(url = %url, ?pairs, "Fetching product list");

        let response = self
            .http
            .get(url)
            .query(&pairs)
            .send()
            .await
            .map_err(|e| network_error(LIST_CONTEXT, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "{}", LIST_CONTEXT);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                context: LIST_CONTEXT,
            });
        }

        let envelope: ListEnvelope = read_json(response, LIST_CONTEXT).await?;
        let page = envelope.resolve(query);

        tracing::debug!(
            items = page.items.len(),
            total = page.total,
            page = page.page,
            "Product list received"
        );

        Ok(page)
    }

    /// Fetch a single product: `GET /products/:id`
    pub async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::InvalidId);
        }

        let url = self.products_url(Some(id))?;
        tracing::debug!(url = %url, "Fetching product");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(DETAIL_CONTEXT, e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!(id, "Product not found");
            return Err(CatalogError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(id, status = status.as_u16(), "{}", DETAIL_CONTEXT);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                context: DETAIL_CONTEXT,
            });
        }

        read_json(response, DETAIL_CONTEXT).await
    }

    /// `{base}/products` or `{base}/products/{id}` with the id encoded as one segment
    fn products_url(&self, id: Option<&str>) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CatalogError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("products");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

fn network_error(context: &str, err: reqwest::Error) -> CatalogError {
    tracing::warn!("{}: {}", context, err);
    CatalogError::Network(err.to_string())
}

/// Read the body and decode it, keeping transfer and parse failures apart
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, CatalogError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| network_error(context, e))?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("{}: invalid JSON body: {}", context, e);
        CatalogError::Decode(e.to_string())
    })
}
