// Modal overlay rendering
//
// Modals are drawn last, centered over the current screen.

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Products", header_style)),
        kb("↑/↓, j/k", "Move selection"),
        kb("Home/End", "First / last row"),
        kb("Enter", "Open product"),
        kb("←/→, [/]", "Previous / next page"),
        Line::raw(""),
        Line::from(Span::styled("  Filters", header_style)),
        kb("/", "Edit search (Enter/Esc done)"),
        kb("c / C", "Next / previous category"),
        kb("s", "Sort by name or price"),
        kb("o", "Toggle ascending/descending"),
        Line::raw(""),
        Line::from(Span::styled("  Product", header_style)),
        kb("Esc, b", "Back to products"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("r", "Retry / refresh"),
        kb("y", "Copy to clipboard"),
        kb("F12", "Toggle logs panel"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
        ]),
    ]);

    let width = 48;
    let height = 28;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
