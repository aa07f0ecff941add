// Color themes for the TUI
//
// Two built-in palettes selected by the `theme` config key. Components read
// colors from `Theme` fields and never hardcode them.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a config value; unknown names fall back to dark
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub border: Color,
    pub border_type: BorderType,
    /// Focused borders, active controls
    pub highlight: Color,
    /// Selected row background
    pub selection: Color,
    /// Selected row foreground (contrast pair for `selection`)
    pub selection_fg: Color,
    /// Secondary text, disabled controls
    pub muted: Color,
    pub price: Color,
    pub in_stock: Color,
    pub out_of_stock: Color,
    pub error: Color,
    pub warning: Color,
    pub status_bar: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            foreground: Color::White,
            title: Color::Cyan,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            highlight: Color::Yellow,
            selection: Color::Blue,
            selection_fg: Color::White,
            muted: Color::DarkGray,
            price: Color::Green,
            in_stock: Color::Green,
            out_of_stock: Color::Red,
            error: Color::Red,
            warning: Color::Yellow,
            status_bar: Color::Gray,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(30, 30, 30),
            title: Color::Rgb(185, 28, 28),
            border: Color::Rgb(160, 160, 160),
            border_type: BorderType::Plain,
            highlight: Color::Rgb(220, 38, 38),
            selection: Color::Rgb(254, 202, 202),
            selection_fg: Color::Rgb(30, 30, 30),
            muted: Color::Rgb(120, 120, 120),
            price: Color::Rgb(21, 128, 61),
            in_stock: Color::Rgb(21, 128, 61),
            out_of_stock: Color::Rgb(185, 28, 28),
            error: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(180, 83, 9),
            status_bar: Color::Rgb(80, 80, 80),
        }
    }
}
