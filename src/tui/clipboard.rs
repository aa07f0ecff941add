//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard is created fresh
//! each time to avoid holding resources between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Toast text for a copy attempt of `what` ("product id", "product details")
pub fn toast_message(what: &str, result: &Result<()>) -> String {
    match result {
        Ok(()) => format!("✓ Copied {} to clipboard", what),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            "✗ Failed to copy".to_string()
        }
    }
}
