//! Configuration tests
//!
//! Precedence, parsing and the TOML template. Environment lookups are
//! injected through `Config::resolve` so no test touches the process env.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The generated template must parse back into the same configuration
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.api_url = "https://shop.example.com/api".to_string();
    config.page_limit = 20;
    config.theme = "light".to_string();
    config.categories = vec!["Garden".to_string(), "Toys & Games".to_string()];
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed = Config::parse_file_config(&config.to_toml()).unwrap();
    assert_eq!(Config::resolve(parsed, no_env), config);
}

#[test]
fn test_roundtrip_escapes_unicode_and_quotes() {
    let mut config = Config::default();
    config.api_url = "http://cafe\u{301}.example/api".to_string();
    config.categories = vec!["Cafe\u{301}".to_string(), "12\" Records".to_string()];
    config.logging.file_prefix = "list\\ings".to_string();

    let parsed = Config::parse_file_config(&config.to_toml()).unwrap();
    assert_eq!(Config::resolve(parsed, no_env), config);
}

#[test]
fn test_template_is_commented() {
    let toml_str = Config::default().to_toml();
    assert!(toml_str.contains("# Base URL of the catalog API"));
    assert!(toml_str.contains("[logging]"));
    assert!(!toml_str.contains("demo_mode"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
api_url = "http://file.example"
page_limit = 12
theme = "light"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("LISTINGS_API_URL", "http://env.example"),
        ("LISTINGS_PAGE_LIMIT", "4"),
        ("LISTINGS_THEME", "dark"),
    ]);
    let config = Config::resolve(file, env);

    assert_eq!(config.api_url, "http://env.example");
    assert_eq!(config.page_limit, 4);
    assert_eq!(config.theme, "dark");
}

#[test]
fn test_file_overrides_defaults() {
    let file = Config::parse_file_config(
        r#"
page_limit = 12
debounce_ms = 0
categories = ["Garden", "  ", "Toys"]
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.page_limit, 12);
    assert_eq!(config.debounce_ms, 0);
    assert_eq!(config.categories, vec!["Garden", "Toys"]);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_invalid_env_values_fall_through() {
    let file = Config::parse_file_config("page_limit = 10").unwrap();
    let env = env_from(&[("LISTINGS_PAGE_LIMIT", "lots"), ("LISTINGS_API_URL", "  ")]);
    let config = Config::resolve(file, env);

    assert_eq!(config.page_limit, 10);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_page_limit_is_clamped() {
    let zero = Config::resolve(Config::parse_file_config("page_limit = 0").unwrap(), no_env);
    assert_eq!(zero.page_limit, 1);

    let huge = Config::resolve(
        Config::parse_file_config("page_limit = 100000").unwrap(),
        no_env,
    );
    assert_eq!(huge.page_limit, MAX_PAGE_LIMIT);
}

#[test]
fn test_demo_mode_is_env_only() {
    assert!(Config::resolve(FileConfig::default(), env_from(&[("LISTINGS_DEMO", "1")])).demo_mode);
    assert!(
        Config::resolve(FileConfig::default(), env_from(&[("LISTINGS_DEMO", "TRUE")])).demo_mode
    );
    assert!(!Config::resolve(FileConfig::default(), env_from(&[("LISTINGS_DEMO", "0")])).demo_mode);
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("page_limit = \"eight\"").is_err());
    assert!(Config::parse_file_config("api_url = http://unquoted").is_err());
}

#[test]
fn test_logging_section() {
    let file = Config::parse_file_config(
        r#"
[logging]
level = "debug"
file_enabled = true
file_rotation = "NEVER"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.file_prefix, "listings");
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("Daily"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::Never.as_str(), "never");
}
