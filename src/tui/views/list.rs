// List view
//
// Toolbar on top, then whichever of the status panels or the product table
// the list state calls for. Pagination only shows alongside the table.

use crate::tui::app::App;
use crate::tui::components::{states, PageInfo, Toolbar};
use crate::tui::state::DisplayState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

const FOOTER_HEIGHT: u16 = 2;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [toolbar_area, body] = Layout::vertical([
        Constraint::Length(Toolbar::height(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);

    app.toolbar.render(f, toolbar_area, &app.list, &app.theme);

    let theme = &app.theme;
    match app.list.display_state() {
        DisplayState::Loading => {
            states::render_loading(f, body, theme, app.animation_frame(), "Loading products...")
        }
        DisplayState::Error => {
            let message = app
                .list
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            states::render_error(f, body, theme, "Error loading products", &message, true);
        }
        DisplayState::Empty => {
            states::render_empty(f, body, theme, states::EMPTY_TITLE, states::EMPTY_HINT)
        }
        DisplayState::Ready => {
            let [table_area, footer] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(FOOTER_HEIGHT)])
                    .areas(body);

            app.table
                .render(f, table_area, &app.list.items, app.list.selected, theme);

            let info = PageInfo {
                page: app.list.page,
                total_pages: app.list.total_pages(),
                shown: app.list.items.len(),
                total: app.list.total,
            };
            app.pagination.render(f, footer, &info, theme);
        }
    }
}
