//! Status panels shown instead of content: loading, empty, error
//!
//! All three render centered in the content area. The spinner frame comes
//! from the App's tick counter.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

pub const EMPTY_TITLE: &str = "No products found";
pub const EMPTY_HINT: &str = "Try adjusting your search or filter criteria.";

/// Spinner character for an animation frame
pub fn spinner_char(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

pub fn render_loading(f: &mut Frame, area: Rect, theme: &Theme, frame: usize, label: &str) {
    let lines = vec![
        Line::from(Span::styled(
            spinner_char(frame).to_string(),
            Style::default().fg(theme.highlight),
        )),
        Line::raw(""),
        Line::from(Span::styled(label.to_string(), Style::default().fg(theme.muted))),
    ];
    render_centered(f, area, theme, lines);
}

pub fn render_empty(f: &mut Frame, area: Rect, theme: &Theme, title: &str, hint: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(theme.muted))),
    ];
    render_centered(f, area, theme, lines);
}

/// Error panel; `retry` adds the key hint for trying again
pub fn render_error(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    message: &str,
    retry: bool,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.error))),
    ];
    if retry {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("[r]", Style::default().fg(theme.highlight)),
            Span::styled(" Retry", Style::default().fg(theme.foreground)),
        ]));
    }
    render_centered(f, area, theme, lines);
}

fn render_centered(f: &mut Frame, area: Rect, theme: &Theme, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = lines.len() as u16;
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, middle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(render: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
        terminal.draw(render).unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_char(0), '◐');
        assert_eq!(spinner_char(5), '◓');
    }

    #[test]
    fn empty_state_text() {
        let screen = draw(|f| render_empty(f, f.area(), &Theme::dark(), EMPTY_TITLE, EMPTY_HINT));
        assert!(screen.contains("No products found"));
        assert!(screen.contains("Try adjusting your search or filter criteria."));
    }

    #[test]
    fn error_state_offers_retry() {
        let screen = draw(|f| {
            render_error(
                f,
                f.area(),
                &Theme::dark(),
                "Error loading products",
                "Failed to fetch products (HTTP 500)",
                true,
            )
        });
        assert!(screen.contains("Error loading products"));
        assert!(screen.contains("Failed to fetch products (HTTP 500)"));
        assert!(screen.contains("[r] Retry"));

        let without = draw(|f| render_error(f, f.area(), &Theme::dark(), "Error", "boom", false));
        assert!(!without.contains("Retry"));
    }

    #[test]
    fn loading_state_shows_label() {
        let screen = draw(|f| {
            render_loading(f, f.area(), &Theme::dark(), 0, "Loading products...")
        });
        assert!(screen.contains("Loading products..."));
    }
}
