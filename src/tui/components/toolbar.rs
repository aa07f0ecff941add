//! Toolbar: search, category filter and sort controls
//!
//! The toolbar is a controlled component. It renders exactly the values held
//! by [`ListState`] and reports every change upward as a [`ToolbarAction`];
//! the only state it keeps is whether the search box is being edited.

use crate::tui::layout::Breakpoint;
use crate::tui::state::ListState;
use crate::tui::theme::Theme;
use crate::tui::traits::Interactive;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Search by name...";
const CURSOR: &str = "▏";

/// Changes the toolbar asks the list view to make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    StartEditing,
    /// Leave the search box (Enter or Esc); pending search applies now
    StopEditing,
    Input(char),
    Backspace,
    ClearSearch,
    NextCategory,
    PrevCategory,
    NextSortField,
    ToggleSortOrder,
}

#[derive(Debug, Default)]
pub struct Toolbar {
    editing: bool,
}

impl Toolbar {
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Rows needed at this width (narrow terminals stack the controls)
    pub fn height(width: u16) -> u16 {
        if Breakpoint::from_width(width).at_least(Breakpoint::Normal) {
            3
        } else {
            4
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, list: &ListState, theme: &Theme) {
        let label = Style::default().fg(theme.muted);
        let value = Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD);

        let mut search = vec![Span::styled("Search: ", label)];
        if list.search.is_empty() && !self.editing {
            search.push(Span::styled(PLACEHOLDER, label));
        } else {
            search.push(Span::styled(list.search.clone(), value));
        }
        if self.editing {
            search.push(Span::styled(CURSOR, Style::default().fg(theme.highlight)));
        }

        let filters = vec![
            Span::styled("Category: ", label),
            Span::styled(list.category_label().to_string(), value),
            Span::styled("   Sort: ", label),
            Span::styled(list.sort_field.label(), value),
            Span::styled(format!(" {}", list.sort_order.arrow()), value),
        ];

        let lines = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
            let mut line = search;
            line.push(Span::raw("   "));
            line.extend(filters);
            vec![Line::from(line)]
        } else {
            vec![Line::from(search), Line::from(filters)]
        };

        let border = if self.editing {
            theme.highlight
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .title(" Filters ");

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Interactive for Toolbar {
    type Action = ToolbarAction;

    fn handle_key(&mut self, key: KeyEvent) -> Option<ToolbarAction> {
        if self.editing {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.editing = false;
                    Some(ToolbarAction::StopEditing)
                }
                KeyCode::Backspace => Some(ToolbarAction::Backspace),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(ToolbarAction::ClearSearch)
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(ToolbarAction::Input(c))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('/') => {
                self.editing = true;
                Some(ToolbarAction::StartEditing)
            }
            KeyCode::Char('c') => Some(ToolbarAction::NextCategory),
            KeyCode::Char('C') => Some(ToolbarAction::PrevCategory),
            KeyCode::Char('s') => Some(ToolbarAction::NextSortField),
            KeyCode::Char('o') => Some(ToolbarAction::ToggleSortOrder),
            _ => None,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.editing {
            Some(" type to search │ Enter/Esc:done │ Ctrl+U:clear")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn slash_enters_edit_mode_and_captures_text() {
        let mut toolbar = Toolbar::default();
        assert_eq!(
            toolbar.handle_key(key(KeyCode::Char('/'))),
            Some(ToolbarAction::StartEditing)
        );
        assert!(toolbar.is_editing());

        // Letters that are shortcuts outside edit mode are text inside it
        assert_eq!(
            toolbar.handle_key(key(KeyCode::Char('c'))),
            Some(ToolbarAction::Input('c'))
        );
        assert_eq!(
            toolbar.handle_key(key(KeyCode::Backspace)),
            Some(ToolbarAction::Backspace)
        );
        assert_eq!(
            toolbar.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(ToolbarAction::ClearSearch)
        );

        assert_eq!(
            toolbar.handle_key(key(KeyCode::Esc)),
            Some(ToolbarAction::StopEditing)
        );
        assert!(!toolbar.is_editing());
    }

    #[test]
    fn shortcuts_outside_edit_mode() {
        let mut toolbar = Toolbar::default();
        assert_eq!(
            toolbar.handle_key(key(KeyCode::Char('c'))),
            Some(ToolbarAction::NextCategory)
        );
        assert_eq!(
            toolbar.handle_key(key(KeyCode::Char('C'))),
            Some(ToolbarAction::PrevCategory)
        );
        assert_eq!(
            toolbar.handle_key(key(KeyCode::Char('s'))),
            Some(ToolbarAction::NextSortField)
        );
        assert_eq!(
            toolbar.handle_key(key(KeyCode::Char('o'))),
            Some(ToolbarAction::ToggleSortOrder)
        );
        assert_eq!(toolbar.handle_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn renders_controlled_values() {
        let mut list = ListState::new(8, vec!["Books".to_string()]);
        list.set_category("Books");
        list.toggle_sort_order();

        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|f| Toolbar::default().render(f, f.area(), &list, &Theme::dark()))
            .unwrap();
        let lines = buffer_lines(terminal.backend().buffer());

        assert!(lines[1].contains("Search: Search by name..."));
        assert!(lines[1].contains("Category: Books"));
        assert!(lines[1].contains("Sort: Name ↓"));
    }

    #[test]
    fn narrow_toolbar_stacks_controls() {
        let mut list = ListState::new(8, vec![]);
        list.set_search("lamp");

        let mut terminal = Terminal::new(TestBackend::new(50, 4)).unwrap();
        terminal
            .draw(|f| Toolbar::default().render(f, f.area(), &list, &Theme::dark()))
            .unwrap();
        let lines = buffer_lines(terminal.backend().buffer());

        assert_eq!(Toolbar::height(50), 4);
        assert!(lines[1].contains("Search: lamp"));
        assert!(lines[2].contains("Category: All Categories"));
    }
}
