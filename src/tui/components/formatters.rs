// Text formatters
//
// Shared helpers for fitting text into fixed-width cells. Widths are
// measured in terminal columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit `text` into `width` columns, ending with `…` when cut
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate("Wireless Headphones", 10), "Wireless …");
/// assert_eq!(truncate("Lamp", 10), "Lamp");
/// ```
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Pad `text` with spaces on the right to `width` columns
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Lamp", 10), "Lamp");
        assert_eq!(truncate("Lamp", 4), "Lamp");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("Wireless Headphones", 10), "Wireless …");
        assert_eq!(truncate("Lamp", 1), "…");
        assert_eq!(truncate("Lamp", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate("日本語の本", 5), "日本…");
    }

    #[test]
    fn pad_right_measures_columns() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("日本", 5), "日本 ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }
}
