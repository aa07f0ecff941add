// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the interactive viewer starts. Subcommands:
// - list: fetch one page and print it (table or JSON)
// - show <ID>: fetch one product and print it
// - demo-server: serve the sample catalog in the foreground
// - config --show/--path/--reset/--edit: configuration management

use crate::catalog::{
    format_price, page_count, page_label, showing_summary, sort_products, stock_label,
    CatalogClient, ListQuery, Product, ProductPage, SortField, SortOrder,
};
use crate::config::{Config, VERSION};
use crate::tui::components::formatters::pad_right;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::net::SocketAddr;
use std::process::Command;
use unicode_width::UnicodeWidthStr;

/// listings - browse a product catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "listings")]
#[command(version = VERSION)]
#[command(about = "Terminal catalog viewer", long_about = None)]
pub struct Cli {
    /// Catalog API base URL (overrides LISTINGS_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Browse the built-in sample catalog served in-process
    #[arg(long, global = true)]
    pub demo: bool,

    /// Open the viewer directly on this product's detail screen
    #[arg(long, value_name = "ID")]
    pub product: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of products and print it
    List(ListArgs),

    /// Fetch one product and print it
    Show {
        /// Product id
        id: String,

        /// Print the raw product as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the sample catalog over HTTP
    DemoServer {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Search text (matched by the server)
    #[arg(long, short)]
    pub query: Option<String>,

    /// Category filter
    #[arg(long, short)]
    pub category: Option<String>,

    /// Sort field: name or price
    #[arg(long, default_value = "name")]
    pub sort: SortField,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size (defaults to page_limit from the config)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Apply flag overrides on top of env/file configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = self.api_url.as_deref().map(str::trim) {
            if !url.is_empty() {
                config.api_url = url.to_string();
            }
        }
        if self.demo {
            config.demo_mode = true;
        }
    }
}

impl ListArgs {
    fn to_query(&self, default_limit: u32) -> ListQuery {
        ListQuery {
            query: self.query.clone().unwrap_or_default().trim().to_string(),
            category: self.category.clone().unwrap_or_default(),
            page: self.page.max(1),
            limit: self.limit.unwrap_or(default_limit).max(1),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Headless commands
// ─────────────────────────────────────────────────────────────────────────────

/// `listings list`: one fetch, sorted client-side, printed to stdout
pub async fn run_list(client: &CatalogClient, args: &ListArgs, default_limit: u32) -> Result<()> {
    let query = args.to_query(default_limit);
    let mut page = client
        .list_products(&query)
        .await
        .with_context(|| format!("Listing products from {}", client.base_url()))?;
    sort_products(&mut page.items, args.sort, args.order);

    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &page).context("Failed to write JSON")?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(render_page(&page).as_bytes())?;
    }
    Ok(())
}

/// `listings show <ID>`
pub async fn run_show(client: &CatalogClient, id: &str, json: bool) -> Result<()> {
    let product = client
        .get_product(id)
        .await
        .with_context(|| format!("Loading product {:?}", id))?;

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &product).context("Failed to write JSON")?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(render_product(&product).as_bytes())?;
    }
    Ok(())
}

/// Plain-text table plus footer and page line
fn render_page(page: &ProductPage) -> String {
    if page.items.is_empty() {
        return "No products found\nTry adjusting your search or filter criteria.\n".to_string();
    }

    let header = ["ID", "Name", "Price", "Category", "Stock"];
    let rows: Vec<[String; 5]> = page
        .items
        .iter()
        .map(|p| {
            [
                p.id.clone(),
                p.name.clone(),
                format_price(p.price),
                p.category.clone(),
                stock_label(p.in_stock).to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&showing_summary(page.items.len(), page.total));
    out.push('\n');
    out.push_str(&page_label(page.page, page_count(page.total, page.limit)));
    out.push('\n');
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad_right(cell, width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn render_product(product: &Product) -> String {
    let mut out = format!(
        "{}\n\nPrice:     {}\nCategory:  {}\nStatus:    {}\nID:        {}\n",
        product.name,
        format_price(product.price),
        product.category,
        stock_label(product.in_stock),
        product.id,
    );
    if let Some(url) = &product.image_url {
        out.push_str(&format!("Image:     {}\n", url));
    }
    if let Some(description) = &product.description {
        out.push_str(&format!("\n{}\n", description));
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Config management
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, reset: bool, edit: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else if edit {
        handle_config_edit();
    } else {
        // No flag provided, show help
        println!("Usage: listings config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    if config.demo_mode {
        println!();
        println!("# Demo mode enabled via LISTINGS_DEMO");
    }

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64, in_stock: bool) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category: "Books".to_string(),
            in_stock,
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from([
            "listings", "list", "--query", "lamp", "--sort", "price", "--order", "desc",
            "--page", "2", "--json",
        ])
        .unwrap();

        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.query.as_deref(), Some("lamp"));
        assert_eq!(args.sort, SortField::Price);
        assert_eq!(args.order, SortOrder::Desc);
        assert!(args.json);

        let query = args.to_query(8);
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 8);
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["listings", "list", "--sort", "rating"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["listings", "show", "42", "--api-url", "http://x", "--demo"])
                .unwrap();
        assert!(cli.demo);

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api_url, "http://x");
        assert!(config.demo_mode);
    }

    #[test]
    fn blank_api_url_flag_is_ignored() {
        let cli = Cli::try_parse_from(["listings", "--api-url", "  "]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deep_link_flag() {
        let cli = Cli::try_parse_from(["listings", "--product", "7"]).unwrap();
        assert_eq!(cli.product.as_deref(), Some("7"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn renders_table_with_footer() {
        let page = ProductPage {
            items: vec![
                product("1", "Desk Lamp", 24.5, true),
                product("2", "Atlas", 9.0, false),
            ],
            total: 11,
            page: 1,
            limit: 2,
        };
        let out = render_page(&page);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("ID  Name"));
        assert!(lines[1].contains("Desk Lamp  $24.50"));
        assert!(lines[2].contains("Out of stock"));
        assert!(out.contains("Showing 2 of 11 products"));
        assert!(out.ends_with("Page 1 of 6\n"));
    }

    #[test]
    fn aligns_columns_by_display_width() {
        let page = ProductPage {
            items: vec![product("1", "日本茶", 4.0, true), product("2", "Tea", 4.0, true)],
            total: 2,
            page: 1,
            limit: 8,
        };
        let out = render_page(&page);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[1].starts_with("1   日本茶  $4.00"));
        assert!(lines[2].starts_with("2   Tea     $4.00"));
    }

    #[test]
    fn renders_empty_state() {
        let page = ProductPage {
            items: vec![],
            total: 0,
            page: 1,
            limit: 8,
        };
        assert!(render_page(&page).starts_with("No products found"));
    }

    #[test]
    fn renders_product_detail() {
        let mut p = product("9", "Atlas", 9.0, true);
        p.image_url = Some("https://img.example/9.png".to_string());
        p.description = Some("Maps of the world".to_string());

        let out = render_product(&p);
        assert!(out.starts_with("Atlas\n"));
        assert!(out.contains("Price:     $9.00"));
        assert!(out.contains("Status:    In stock"));
        assert!(out.contains("Image:     https://img.example/9.png"));
        assert!(out.ends_with("Maps of the world\n"));
    }
}
