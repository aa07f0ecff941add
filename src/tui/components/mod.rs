// Components module - reusable UI building blocks
//
// Shell components are rendered around every screen:
// - Title bar: app name, API URL, fetch spinner
// - Status bar: key hints and the latest warning
// - Logs panel: system log tail (F12)
// - Toast: transient confirmation overlay
//
// Catalog components make up the list screen:
// - Toolbar: search, category and sort controls
// - Products table: one row per product
// - Pagination: result count and page controls
// - States: loading, empty and error panels

pub mod formatters;
pub mod logs_panel;
pub mod pagination;
pub mod products_table;
pub mod states;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod toolbar;

pub use pagination::{PageAction, PageInfo, Pagination};
pub use products_table::{ProductsTable, TableAction};
pub use toast::Toast;
pub use toolbar::{Toolbar, ToolbarAction};
