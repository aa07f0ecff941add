// View state for the list and detail screens
//
// Pure state machines with no terminal or network access. Every operation
// that needs data reports it to the caller (a query to fetch, or whether a
// result was applied), which keeps the fetch plumbing in the App and makes
// these types easy to test.
//
// Each fetch is tagged with a generation. Results carrying an older
// generation belong to a superseded request and are discarded.

use crate::catalog::{
    clamp_page, page_count, sort_products, unique_categories, CatalogError, ListQuery, Product,
    ProductPage, SortField, SortOrder,
};

/// Label of the empty category filter
pub const ALL_CATEGORIES: &str = "All Categories";

/// What a screen should show right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error,
    Empty,
    Ready,
}

/// Outcome of applying a list response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate {
    /// Response belonged to a superseded request
    Stale,
    /// State updated
    Applied,
    /// Total shrank below the current page; fetch the clamped page
    Refetch(ListQuery),
}

// ─────────────────────────────────────────────────────────────────────────────
// List
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ListState {
    pub search: String,
    /// Empty string means every category
    pub category: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub page: u32,
    pub limit: u32,

    /// Current page of items, already sorted
    pub items: Vec<Product>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<CatalogError>,
    /// Index into `items`
    pub selected: usize,

    configured_categories: Vec<String>,
    seen_categories: Vec<String>,
    generation: u64,
}

impl ListState {
    pub fn new(limit: u32, categories: Vec<String>) -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
            limit: limit.max(1),
            items: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            selected: 0,
            configured_categories: categories,
            seen_categories: Vec::new(),
            generation: 0,
        }
    }

    /// Query for the current filters and page
    pub fn query(&self) -> ListQuery {
        ListQuery {
            query: self.search.trim().to_string(),
            category: self.category.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    /// Start a fetch for the current state; returns its generation and query
    pub fn begin_fetch(&mut self) -> (u64, ListQuery) {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        (self.generation, self.query())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the search text. Returns true if it changed (page reset to 1).
    pub fn set_search(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search {
            return false;
        }
        self.search = text;
        self.page = 1;
        true
    }

    /// Replace the category filter. Returns true if it changed (page reset to 1).
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if category == self.category {
            return false;
        }
        self.category = category;
        self.page = 1;
        true
    }

    /// Filter values offered by the toolbar: "" (all), configured, then seen
    pub fn category_options(&self) -> Vec<String> {
        let mut options = vec![String::new()];
        for category in self
            .configured_categories
            .iter()
            .chain(self.seen_categories.iter())
        {
            if !options.contains(category) {
                options.push(category.clone());
            }
        }
        options
    }

    /// Step the category filter through the options (wrapping)
    pub fn cycle_category(&mut self, forward: bool) -> bool {
        let options = self.category_options();
        let len = options.len();
        let current = options
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.set_category(options[next].clone())
    }

    /// Display label for the current category filter
    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            ALL_CATEGORIES
        } else {
            &self.category
        }
    }

    /// Change the sort field; reorders the current items without a fetch
    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort_field = field;
        self.resort();
    }

    /// Flip the sort direction; reorders the current items without a fetch
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        self.resort();
    }

    fn resort(&mut self) {
        let selected_id = self.selected_product().map(|p| p.id.clone());
        sort_products(&mut self.items, self.sort_field, self.sort_order);
        if let Some(id) = selected_id {
            self.selected = self.items.iter().position(|p| p.id == id).unwrap_or(0);
        }
    }

    pub fn total_pages(&self) -> u32 {
        page_count(self.total, self.limit)
    }

    /// Move to the next page if there is one
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous page if there is one
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Apply a list response tagged with `generation`
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<ProductPage, CatalogError>,
    ) -> ListUpdate {
        if generation != self.generation {
            return ListUpdate::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                sort_products(&mut self.items, self.sort_field, self.sort_order);
                for category in unique_categories(&self.items) {
                    if !self.seen_categories.contains(&category) {
                        self.seen_categories.push(category);
                    }
                }
                self.selected = self.selected.min(self.items.len().saturating_sub(1));

                let clamped = clamp_page(self.page, self.total, self.limit);
                if clamped != self.page {
                    self.page = clamped;
                    let (_, query) = self.begin_fetch();
                    return ListUpdate::Refetch(query);
                }
                ListUpdate::Applied
            }
            Err(error) => {
                self.items.clear();
                self.selected = 0;
                self.error = Some(error);
                ListUpdate::Applied
            }
        }
    }

    pub fn display_state(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if self.error.is_some() {
            DisplayState::Error
        } else if self.items.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Ready
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Id being shown; None when nothing resolved
    pub id: Option<String>,
    pub product: Option<Product>,
    pub loading: bool,
    pub error: Option<CatalogError>,
    generation: u64,
}

impl DetailState {
    /// Resolve a new id. Returns the fetch to issue, or None when the id is
    /// blank (the screen then shows its empty state).
    pub fn open(&mut self, id: &str) -> Option<(u64, String)> {
        self.generation += 1;
        self.product = None;
        self.error = None;

        let id = id.trim();
        if id.is_empty() {
            self.id = None;
            self.loading = false;
            return None;
        }

        self.id = Some(id.to_string());
        self.loading = true;
        Some((self.generation, id.to_string()))
    }

    /// Fetch the current id again
    pub fn retry(&mut self) -> Option<(u64, String)> {
        let id = self.id.clone()?;
        self.open(&id)
    }

    /// Forget the current product; in-flight results become stale
    pub fn clear(&mut self) {
        self.generation += 1;
        self.id = None;
        self.product = None;
        self.loading = false;
        self.error = None;
    }

    /// Apply a detail response. Returns false for stale results.
    pub fn apply(&mut self, generation: u64, result: Result<Product, CatalogError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(product) => self.product = Some(product),
            Err(error) => self.error = Some(error),
        }
        true
    }

    pub fn display_state(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if self.error.is_some() {
            DisplayState::Error
        } else if self.product.is_none() {
            DisplayState::Empty
        } else {
            DisplayState::Ready
        }
    }
}
