// Status bar component
//
// Key hints for the current screen on the left. The most recent warning or
// error from the log buffer is appended so failures are visible without
// opening the logs panel.

use crate::logging::LogLevel;
use crate::tui::app::{App, View};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for a screen, shortened on narrow terminals
pub fn hints(view: View, bp: Breakpoint) -> &'static str {
    match (view, bp.at_least(Breakpoint::Wide)) {
        (View::List, true) => {
            " /:search │ c:category │ s:sort │ o:order │ ←→:page │ Enter:open │ r:retry │ y:copy │ ?:help │ q:quit"
        }
        (View::List, false) => " / c s o │ ←→ │ Enter │ ?:help │ q:quit",
        (View::Detail, true) => " Esc:back │ r:retry │ y:copy │ ?:help │ q:quit",
        (View::Detail, false) => " Esc:back │ r │ y │ q",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    // The search box owns the keyboard while editing, so its hint wins
    let hint = app
        .toolbar
        .focus_hint()
        .unwrap_or_else(|| hints(app.view, bp));
    let mut spans = vec![Span::styled(
        hint,
        Style::default().fg(app.theme.status_bar),
    )];

    if bp.at_least(Breakpoint::Wide) {
        if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Warn) {
            let color = if entry.level == LogLevel::Error {
                app.theme.error
            } else {
                app.theme.warning
            };
            spans.push(Span::styled(
                format!(
                    " │ {} {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.message
                ),
                Style::default().fg(color),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(app.theme.border)),
    );

    f.render_widget(status, area);
}
