//! Product table: one row per item with the selected row highlighted
//!
//! Columns are Name, Price, Category and Stock. Compact terminals drop the
//! Category column. Enter on a row opens that product's detail screen.

use crate::catalog::{format_price, stock_label, Product};
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use crate::tui::traits::Interactive;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    Open,
}

#[derive(Debug, Default)]
pub struct ProductsTable;

impl ProductsTable {
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        items: &[Product],
        selected: usize,
        theme: &Theme,
    ) {
        let with_category = Breakpoint::from_width(area.width).shows_category();

        let header_style = Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD);
        let mut header = vec![Cell::from("Name"), Cell::from("Price")];
        if with_category {
            header.push(Cell::from("Category"));
        }
        header.push(Cell::from("Stock"));

        let rows = items.iter().map(|product| {
            let stock_color = if product.in_stock {
                theme.in_stock
            } else {
                theme.out_of_stock
            };
            let mut cells = vec![
                Cell::from(product.name.clone()),
                Cell::from(format_price(product.price)).style(Style::default().fg(theme.price)),
            ];
            if with_category {
                cells.push(Cell::from(product.category.clone()));
            }
            cells.push(
                Cell::from(stock_label(product.in_stock)).style(Style::default().fg(stock_color)),
            );
            Row::new(cells).style(Style::default().fg(theme.foreground))
        });

        let widths: Vec<Constraint> = if with_category {
            vec![
                Constraint::Fill(3),
                Constraint::Length(10),
                Constraint::Fill(2),
                Constraint::Length(12),
            ]
        } else {
            vec![
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(12),
            ]
        };

        let table = Table::new(rows, widths)
            .header(Row::new(header).style(header_style).bottom_margin(1))
            .column_spacing(2)
            .row_highlight_style(
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("› ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.border)),
            );

        let mut state = TableState::default().with_selected(Some(selected));
        f.render_stateful_widget(table, area, &mut state);
    }
}

impl Interactive for ProductsTable {
    type Action = TableAction;

    fn handle_key(&mut self, key: KeyEvent) -> Option<TableAction> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(TableAction::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(TableAction::SelectPrev),
            KeyCode::Home | KeyCode::PageUp => Some(TableAction::SelectFirst),
            KeyCode::End | KeyCode::PageDown => Some(TableAction::SelectLast),
            KeyCode::Enter => Some(TableAction::Open),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::buffer_lines;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: "1".into(),
                name: "Desk Lamp".into(),
                price: 24.5,
                category: "Home".into(),
                in_stock: true,
                description: None,
                image_url: None,
            },
            Product {
                id: "2".into(),
                name: "Atlas".into(),
                price: 9.0,
                category: "Books".into(),
                in_stock: false,
                description: None,
                image_url: None,
            },
        ]
    }

    fn render(width: u16) -> Vec<String> {
        let items = products();
        let mut terminal = Terminal::new(TestBackend::new(width, 7)).unwrap();
        terminal
            .draw(|f| ProductsTable.render(f, f.area(), &items, 1, &Theme::dark()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn renders_all_columns_when_wide() {
        let lines = render(80);
        assert!(lines[1].contains("Name"));
        assert!(lines[1].contains("Category"));
        assert!(lines[3].contains("Desk Lamp"));
        assert!(lines[3].contains("$24.50"));
        assert!(lines[3].contains("In stock"));
        assert!(lines[4].contains("› Atlas"));
        assert!(lines[4].contains("Out of stock"));
    }

    #[test]
    fn drops_category_when_compact() {
        let lines = render(50);
        assert!(!lines[1].contains("Category"));
        assert!(!lines[3].contains("Home"));
        assert!(lines[3].contains("$24.50"));
    }

    #[test]
    fn keys_map_to_actions() {
        let mut table = ProductsTable;
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(table.handle_key(key(KeyCode::Char('j'))), Some(TableAction::SelectNext));
        assert_eq!(table.handle_key(key(KeyCode::Up)), Some(TableAction::SelectPrev));
        assert_eq!(table.handle_key(key(KeyCode::End)), Some(TableAction::SelectLast));
        assert_eq!(table.handle_key(key(KeyCode::Enter)), Some(TableAction::Open));
        assert_eq!(table.handle_key(key(KeyCode::Char('x'))), None);
    }
}
