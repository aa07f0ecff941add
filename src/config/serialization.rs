//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use toml::Value;

impl Config {
    /// Render the config as a commented TOML file
    ///
    /// Used for the first-run template and `listings config --reset`.
    /// Runtime-only settings (demo mode) are not persisted.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# listings configuration\n");
        output.push_str("# Precedence: command-line flags > environment variables > this file > defaults\n\n");

        output.push_str("# Base URL of the catalog API (serves /products and /products/:id)\n");
        output.push_str(&format!("api_url = {}\n\n", quote(&self.api_url)));

        output.push_str("# Products requested per page\n");
        output.push_str(&format!("page_limit = {}\n\n", self.page_limit));

        output.push_str("# Per-request timeout in seconds\n");
        output.push_str(&format!(
            "request_timeout_secs = {}\n\n",
            self.request_timeout_secs
        ));

        output.push_str("# Wait this long after the last search keystroke before fetching\n");
        output.push_str(&format!("debounce_ms = {}\n\n", self.debounce_ms));

        output.push_str("# Color theme: \"dark\" or \"light\"\n");
        output.push_str(&format!("theme = {}\n\n", quote(&self.theme)));

        output.push_str("# Categories offered by the category filter\n");
        output.push_str(&format!("categories = {}\n", quote_list(&self.categories)));

        output.push_str(&self.logging_to_toml());
        output
    }

    fn logging_to_toml(&self) -> String {
        let logging = &self.logging;
        let mut output = String::from("\n[logging]\n");
        output.push_str("# trace, debug, info, warn, error (RUST_LOG overrides)\n");
        output.push_str(&format!("level = {}\n", quote(&logging.level)));
        output.push_str("# Write JSON logs to rotating files\n");
        output.push_str(&format!("file_enabled = {}\n", logging.file_enabled));
        output.push_str(&format!(
            "file_dir = {}\n",
            quote(&logging.file_dir.display().to_string())
        ));
        output.push_str("# hourly, daily, never\n");
        output.push_str(&format!(
            "file_rotation = {}\n",
            quote(logging.file_rotation.as_str())
        ));
        output.push_str(&format!("file_prefix = {}\n", quote(&logging.file_prefix)));
        output
    }
}

/// TOML string literal, escaped by the toml crate
fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

fn quote_list(items: &[String]) -> String {
    Value::Array(items.iter().cloned().map(Value::String).collect()).to_string()
}
