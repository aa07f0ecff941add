// Title bar component
//
// Renders the app name, the API being browsed and a spinner while any fetch
// is in flight.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let activity = if app.is_fetching() {
        format!(" {}", app.spinner_char())
    } else {
        String::new()
    };
    let demo = if app.demo_mode { " [demo]" } else { "" };

    let title_text = format!(
        " 🛒 Listings{}{} ──── {}",
        activity, demo, app.api_url
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
