//! List query construction, client-side sorting and page arithmetic

use super::types::Product;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Parameters of a `GET /products` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Free-text search (omitted from the request when empty)
    pub query: String,
    /// Category filter (omitted from the request when empty)
    pub category: String,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            page: 1,
            limit: 8,
        }
    }
}

impl ListQuery {
    /// Query-string pairs in request order: page, limit, then the filters
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("limit", self.limit.max(1).to_string()),
        ];
        if !self.query.is_empty() {
            pairs.push(("query", self.query.clone()));
        }
        if !self.category.is_empty() {
            pairs.push(("category", self.category.clone()));
        }
        pairs
    }
}

/// Field used for client-side ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Price,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Price => "Price",
        }
    }

    /// Cycle to the next field (wraps around)
    pub fn next(self) -> Self {
        match self {
            SortField::Name => SortField::Price,
            SortField::Price => SortField::Name,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            other => Err(format!("unknown sort field '{}' (expected name or price)", other)),
        }
    }
}

/// Direction of the client-side ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Arrow shown next to the sort control
    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}' (expected asc or desc)", other)),
        }
    }
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortField::Price => a.price.total_cmp(&b.price),
    }
}

/// Stable in-place sort of a fetched page
pub fn sort_products(items: &mut [Product], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Number of pages needed for `total` items: `ceil(total / limit)`
pub fn page_count(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let limit = u64::from(limit);
    let pages = total.div_ceil(limit);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a page number into `[1, max(1, page_count)]`
pub fn clamp_page(page: u32, total: u64, limit: u32) -> u32 {
    page.clamp(1, page_count(total, limit).max(1))
}

/// Distinct categories of a page, in first-seen order
pub fn unique_categories(items: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}
