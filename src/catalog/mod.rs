//! Catalog domain: product types, list queries and the HTTP client
//!
//! The catalog API exposes two endpoints:
//! - `GET /products?page=&limit=&query=&category=` returns a list envelope
//! - `GET /products/:id` returns a single product
//!
//! Everything in this module is UI-agnostic. The TUI, the headless CLI and
//! the demo server all build on these types.

mod client;
mod error;
mod query;
mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use query::{
    clamp_page, page_count, sort_products, unique_categories, ListQuery, SortField, SortOrder,
};
pub use types::{Product, ProductPage};

/// Render a price the way every surface shows it: `$12.50`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Human label for the stock flag
pub fn stock_label(in_stock: bool) -> &'static str {
    if in_stock {
        "In stock"
    } else {
        "Out of stock"
    }
}

/// List footer: `Showing 8 of 21 products`
pub fn showing_summary(shown: usize, total: u64) -> String {
    format!("Showing {} of {} products", shown, total)
}

/// Pagination label: `Page 2 of 3`
pub fn page_label(page: u32, pages: u32) -> String {
    format!("Page {} of {}", page, pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_uses_two_decimals() {
        assert_eq!(format_price(99.99), "$99.99");
        assert_eq!(format_price(79.5), "$79.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn stock_labels() {
        assert_eq!(stock_label(true), "In stock");
        assert_eq!(stock_label(false), "Out of stock");
    }

    #[test]
    fn footer_labels() {
        assert_eq!(showing_summary(8, 21), "Showing 8 of 21 products");
        assert_eq!(page_label(2, 3), "Page 2 of 3");
    }
}
