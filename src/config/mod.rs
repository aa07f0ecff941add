//! Configuration for the catalog viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `main`)
//! 2. Environment variables
//! 3. Config file (~/.config/listings/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_PAGE_LIMIT: u32 = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_THEME: &str = "dark";

/// Largest page the viewer will ask for
const MAX_PAGE_LIMIT: u32 = 100;

fn default_categories() -> Vec<String> {
    ["Electronics", "Home", "Clothing", "Books"]
        .into_iter()
        .map(String::from)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the catalog API
    pub api_url: String,

    /// Items requested per page
    pub page_limit: u32,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// Quiet period after the last search keystroke before fetching
    pub debounce_ms: u64,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Categories offered by the toolbar (extended at runtime with
    /// categories seen in fetched pages)
    pub categories: Vec<String>,

    /// Demo mode: serve the sample catalog in-process and browse it
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            theme: DEFAULT_THEME.to_string(),
            categories: default_categories(),
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub page_limit: Option<u32>,
    pub request_timeout_secs: Option<u64>,
    pub debounce_ms: Option<u64>,
    pub theme: Option<String>,
    pub categories: Option<Vec<String>>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/listings/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("listings").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A file that exists but can't be read or parsed is an error: silently
    /// falling back to defaults would hide the typo the user is hunting for.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents).with_context(|| {
                format!(
                    "Failed to parse configuration file {} \
                     (check quoting, booleans and section names, or run `listings config --reset`)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read configuration file {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with environment lookups
    ///
    /// `env` is injected so precedence can be tested without touching the
    /// process environment.
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env("LISTINGS_API_URL")
            .or(file.api_url)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        // Page limit: env > file > default, kept within [1, MAX_PAGE_LIMIT]
        let page_limit = env("LISTINGS_PAGE_LIMIT")
            .and_then(|v| v.parse().ok())
            .or(file.page_limit)
            .unwrap_or(defaults.page_limit)
            .clamp(1, MAX_PAGE_LIMIT);

        // Theme: env > file > default
        let theme = env("LISTINGS_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("LISTINGS_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let categories = file
            .categories
            .map(|list| {
                list.into_iter()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.categories);

        Self {
            api_url,
            page_limit,
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs)
                .max(1),
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            theme,
            categories,
            demo_mode,
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
