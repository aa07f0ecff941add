//! Wire types for the catalog API
//!
//! The API is not consistent about its list envelope: some deployments
//! return `{ items, total, page, limit }`, others `{ data, total }`. Both
//! shapes deserialize into [`ListEnvelope`], which is then resolved against
//! the query that produced it.

use super::query::ListQuery;
use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Ids arrive as strings from most backends but as numbers from some
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// List response as sent by the server, before defaults are applied
#[derive(Debug, Default, Deserialize)]
pub struct ListEnvelope {
    /// Items of the page
    pub items: Option<Vec<Product>>,
    /// Legacy name for `items`, used only when `items` is absent
    pub data: Option<Vec<Product>>,
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListEnvelope {
    /// Fill in missing metadata from the request that produced this envelope
    ///
    /// A missing `total` means the server did not paginate, so the page
    /// itself is the whole result.
    pub fn resolve(self, requested: &ListQuery) -> ProductPage {
        let items = self.items.or(self.data).unwrap_or_default();
        let total = self.total.unwrap_or(items.len() as u64);
        ProductPage {
            total,
            page: self.page.unwrap_or(requested.page).max(1),
            limit: self.limit.unwrap_or(requested.limit).max(1),
            items,
        }
    }
}

/// A resolved page of products
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
