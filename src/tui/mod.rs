// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch results)
// - Routing keys through modal, search box, global and view layers
// - Handing the App's queued commands to the fetcher

pub mod app;
pub mod clipboard;
pub mod components;
pub mod fetch;
pub mod input;
pub mod layout;
pub mod modal;
pub mod state;
pub mod theme;
pub mod traits;
pub mod views;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetch::{FetchResult, Fetcher};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner and debounce resolution
const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the TUI until the user quits
///
/// `deep_link` opens the detail screen for that product id on start.
pub async fn run_tui(
    config: Config,
    client: CatalogClient,
    log_buffer: LogBuffer,
    deep_link: Option<String>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer, deep_link);
    let (mut fetcher, mut fetch_rx) = Fetcher::new(client);

    let result = run_event_loop(&mut terminal, &mut app, &mut fetcher, &mut fetch_rx).await;
    fetcher.shutdown();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on whichever comes first: terminal input, the tick, or a fetch
/// result. After each wake-up the App's queued commands go to the fetcher
/// and the screen is redrawn.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    fetcher: &mut Fetcher,
    fetch_rx: &mut mpsc::Receiver<FetchResult>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK_RATE);

    loop {
        for command in app.take_commands() {
            fetcher.execute(command);
        }

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(result) = fetch_rx.recv() => {
                app.on_fetch_result(result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Search box → Global → View → Component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => {
            // Layer 2: the search box takes every key while editing, undebounced
            if app.toolbar.is_editing() {
                app.handle_search_input(key_event);
                return;
            }

            if !app.handle_key_press(key_event.code) {
                return;
            }

            // Layer 3: global keys
            if handle_global_keys(app, &key_event) {
                return;
            }

            // Layer 4: current view and its components
            if !app.handle_view_key(key_event).was_handled() {
                tracing::trace!(key = ?key_event.code, "Unbound key");
            }
        }
        KeyEventKind::Release => app.handle_key_release(key_event.code),
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Keep the InputHandler in sync or keys stay "pressed" after close
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Quit => {
            app.modal = None;
            app.should_quit = true;
        }
    }

    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same on every screen
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::Help),
        KeyCode::F(12) => app.toggle_logs(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('y') => {
            if let Some((what, text)) = app.copy_payload() {
                let result = clipboard::copy_to_clipboard(&text);
                app.show_toast(clipboard::toast_message(what, &result));
            }
        }
        _ => return false,
    }
    true
}

/// Rendered buffer as one string per row, for assertions
#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductPage};
    use app::View;
    use fetch::Command;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        let mut event = press(code);
        event.kind = KeyEventKind::Release;
        event
    }

    fn app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new(), None);
        app.take_commands();
        app
    }

    fn loaded_app() -> App {
        let mut app = app();
        app.on_fetch_result(FetchResult::List {
            generation: app.list.generation(),
            result: Ok(ProductPage {
                items: vec![Product {
                    id: "9".to_string(),
                    name: "Mug".to_string(),
                    price: 12.0,
                    category: "Home".to_string(),
                    in_stock: true,
                    description: None,
                    image_url: None,
                }],
                total: 1,
                page: 1,
                limit: 8,
            }),
        });
        app
    }

    #[test]
    fn search_box_captures_global_keys() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        assert!(app.toolbar.is_editing());

        for c in ['q', 'r', 'q'] {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        assert!(!app.should_quit);
        assert_eq!(app.list.search, "qrq");
        assert!(app.take_commands().is_empty());

        handle_key_event(&mut app, press(KeyCode::Enter));
        assert!(!app.toolbar.is_editing());
        assert_eq!(app.take_commands().len(), 1);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_modal_absorbs_keys() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.modal, Some(Modal::Help));

        handle_key_event(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.list.category, "");

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn enter_opens_and_escape_returns() {
        let mut app = loaded_app();
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.view, View::Detail);
        assert!(matches!(
            app.take_commands().as_slice(),
            [Command::FetchDetail { id, .. }] if id == "9"
        ));

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.view, View::List);
        assert_eq!(app.take_commands(), vec![Command::CancelDetail]);
    }

    #[test]
    fn held_action_key_fires_once() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::F(12)));
        handle_key_event(&mut app, press(KeyCode::F(12)));
        assert!(app.show_logs);

        handle_key_event(&mut app, release(KeyCode::F(12)));
        handle_key_event(&mut app, press(KeyCode::F(12)));
        assert!(!app.show_logs);
    }

    #[test]
    fn quit_key() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn buffer_lines_reads_rows() {
        let mut buffer = ratatui::buffer::Buffer::empty(ratatui::layout::Rect::new(0, 0, 3, 2));
        buffer.set_string(0, 1, "ab", ratatui::style::Style::default());
        assert_eq!(buffer_lines(&buffer), vec!["   ".to_string(), "ab ".to_string()]);
    }
}
