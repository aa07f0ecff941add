// Views module - screen-level rendering logic
//
// Each view fills the content slot between the title bar and the status bar:
// - List: toolbar, product table and pagination
// - Detail: one product, or the status panel for its fetch
//
// The shell (title, optional logs panel, status bar) is laid out here, then
// overlays are drawn on top: the help modal, then the toast.

mod detail;
mod list;
mod modal;

use super::app::{App, View};
use crate::tui::components::{self, logs_panel};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs {
        logs_panel::PANEL_HEIGHT
    } else {
        0
    };

    let [title, content, logs, status] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(logs_height),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(f.area());

    components::title_bar::render(f, title, app);

    match app.view {
        View::List => list::render(f, content, app),
        View::Detail => detail::render(f, content, app),
    }

    if app.show_logs {
        let entries = app.log_buffer.recent(logs.height as usize);
        logs_panel::render(f, logs, &entries, &app.theme);
    }

    components::status_bar::render(f, status, app);

    if let Some(modal) = &app.modal {
        modal::render(f, modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
