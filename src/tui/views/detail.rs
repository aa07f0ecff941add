// Detail view
//
// A back link, then either the product card or the status panel for the
// detail fetch.

use crate::catalog::{format_price, stock_label, Product};
use crate::tui::app::App;
use crate::tui::components::states;
use crate::tui::state::DisplayState;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let [back, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    let back_link = Line::from(vec![
        Span::styled(" ← Back to products", Style::default().fg(theme.highlight)),
        Span::styled(" (Esc)", Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(back_link), back);

    match app.detail.display_state() {
        DisplayState::Loading => {
            states::render_loading(f, body, theme, app.animation_frame(), "Loading product...")
        }
        DisplayState::Error => {
            let message = app
                .detail
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            states::render_error(f, body, theme, "Error loading product", &message, true);
        }
        DisplayState::Empty => states::render_empty(
            f,
            body,
            theme,
            "No product selected",
            "Pick a product from the list to see its details.",
        ),
        DisplayState::Ready => {
            if let Some(product) = &app.detail.product {
                render_product(f, body, product, theme);
            }
        }
    }
}

fn render_product(f: &mut Frame, area: Rect, product: &Product, theme: &Theme) {
    let label = Style::default().fg(theme.muted);
    let field = |name: &'static str, value: Span<'static>| {
        Line::from(vec![Span::styled(format!("{:<10}", name), label), value])
    };

    let stock_color = if product.in_stock {
        theme.in_stock
    } else {
        theme.out_of_stock
    };

    let mut lines = vec![
        Line::raw(""),
        field(
            "Price",
            Span::styled(
                format_price(product.price),
                Style::default()
                    .fg(theme.price)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        field(
            "Category",
            Span::styled(product.category.clone(), Style::default().fg(theme.foreground)),
        ),
        field(
            "Status",
            Span::styled(stock_label(product.in_stock), Style::default().fg(stock_color)),
        ),
        field(
            "ID",
            Span::styled(product.id.clone(), Style::default().fg(theme.muted)),
        ),
    ];

    if let Some(url) = &product.image_url {
        lines.push(field(
            "Image",
            Span::styled(url.clone(), Style::default().fg(theme.highlight)),
        ));
    }

    if let Some(description) = &product.description {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            description.clone(),
            Style::default().fg(theme.foreground),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", product.name),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ));

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(card, area);
}
