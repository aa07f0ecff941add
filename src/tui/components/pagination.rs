//! Pagination footer: result count plus previous/next controls
//!
//! Previous is disabled on the first page, next on the last page (or when
//! there are no pages at all). Disabled controls render muted.

use crate::catalog::{page_label, showing_summary};
use crate::tui::theme::Theme;
use crate::tui::traits::Interactive;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
}

/// Which controls are enabled: (previous, next)
pub fn controls(page: u32, total_pages: u32) -> (bool, bool) {
    (page > 1, page < total_pages)
}

#[derive(Debug, Default)]
pub struct Pagination;

/// Values the footer displays
pub struct PageInfo {
    pub page: u32,
    pub total_pages: u32,
    pub shown: usize,
    pub total: u64,
}

impl Pagination {
    pub fn render(&self, f: &mut Frame, area: Rect, info: &PageInfo, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(32)]).areas(inner);

        let summary = Paragraph::new(showing_summary(info.shown, info.total))
            .style(Style::default().fg(theme.foreground));
        f.render_widget(summary, left);

        let (prev_enabled, next_enabled) = controls(info.page, info.total_pages);
        let control_style = |enabled: bool| {
            if enabled {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            }
        };

        let line = Line::from(vec![
            Span::styled("‹ Prev", control_style(prev_enabled)),
            Span::raw("  "),
            Span::styled(
                page_label(info.page, info.total_pages),
                Style::default().fg(theme.foreground),
            ),
            Span::raw("  "),
            Span::styled("Next ›", control_style(next_enabled)),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Right), right);
    }
}

impl Interactive for Pagination {
    type Action = PageAction;

    fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => Some(PageAction::Previous),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => Some(PageAction::Next),
            _ => None,
        }
    }
}
