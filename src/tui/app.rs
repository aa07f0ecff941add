// TUI application state
//
// The App owns the list and detail state, the components that edit them and
// the shell state (modal, toast, logs panel). It never touches the network:
// operations that need data push a `Command` which the event loop drains and
// hands to the fetcher. Results come back through `on_fetch_result`.

use super::components::{
    states, PageAction, Pagination, ProductsTable, TableAction, Toast, Toolbar, ToolbarAction,
};
use super::fetch::{Command, FetchResult};
use super::input::InputHandler;
use super::modal::Modal;
use super::state::{DetailState, DisplayState, ListState, ListUpdate};
use super::theme::{Theme, ThemeKind};
use super::traits::{Handled, Interactive};
use crate::catalog::{format_price, stock_label, Product};
use crate::config::Config;
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Screens the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail,
}

pub struct App {
    pub view: View,
    pub list: ListState,
    pub detail: DetailState,

    pub toolbar: Toolbar,
    pub table: ProductsTable,
    pub pagination: Pagination,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    /// Logs panel visible (F12)
    pub show_logs: bool,
    pub should_quit: bool,

    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub api_url: String,
    pub demo_mode: bool,

    animation_frame: usize,
    input_handler: InputHandler,
    commands: Vec<Command>,
    /// When the pending search text should be fetched
    search_deadline: Option<Instant>,
    debounce: Duration,
}

impl App {
    /// Build the app and queue the initial fetches
    ///
    /// `deep_link` opens the detail screen for that id straight away; the
    /// list loads behind it so Esc lands on a populated screen.
    pub fn new(config: &Config, log_buffer: LogBuffer, deep_link: Option<String>) -> Self {
        let mut app = Self {
            view: View::List,
            list: ListState::new(config.page_limit, config.categories.clone()),
            detail: DetailState::default(),
            toolbar: Toolbar::default(),
            table: ProductsTable,
            pagination: Pagination,
            modal: None,
            toast: None,
            show_logs: false,
            should_quit: false,
            theme: ThemeKind::parse(&config.theme).theme(),
            log_buffer,
            api_url: config.api_url.clone(),
            demo_mode: config.demo_mode,
            animation_frame: 0,
            input_handler: InputHandler::default(),
            commands: Vec::new(),
            search_deadline: None,
            debounce: Duration::from_millis(config.debounce_ms),
        };

        app.fetch_list();
        if let Some(id) = deep_link {
            app.open_detail(&id);
        }
        app
    }

    /// Commands queued since the last call
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Timing
    // ─────────────────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance animations, expire the toast, fire a due search
    pub fn tick_at(&mut self, now: Instant) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.toast.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.toast = None;
        }

        if self.search_deadline.is_some_and(|deadline| now >= deadline) {
            tracing::debug!(query = %self.list.search, "Search settled");
            self.fetch_list();
        }
    }

    pub fn spinner_char(&self) -> char {
        states::spinner_char(self.animation_frame)
    }

    pub fn animation_frame(&self) -> usize {
        self.animation_frame
    }

    pub fn is_fetching(&self) -> bool {
        self.list.loading || self.detail.loading
    }

    /// Search text changed but not fetched yet
    pub fn search_pending(&self) -> bool {
        self.search_deadline.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fetching
    // ─────────────────────────────────────────────────────────────────────

    fn fetch_list(&mut self) {
        self.search_deadline = None;
        let (generation, query) = self.list.begin_fetch();
        self.commands.push(Command::FetchList { generation, query });
    }

    fn schedule_search(&mut self) {
        if self.debounce.is_zero() {
            self.fetch_list();
        } else {
            self.search_deadline = Some(Instant::now() + self.debounce);
        }
    }

    pub fn on_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::List { generation, result } => {
                match self.list.apply(generation, result) {
                    ListUpdate::Stale => {
                        tracing::debug!(generation, "Dropping stale product list");
                    }
                    ListUpdate::Applied => {}
                    ListUpdate::Refetch(query) => {
                        tracing::debug!(page = query.page, "Page out of range, refetching");
                        self.commands.push(Command::FetchList {
                            generation: self.list.generation(),
                            query,
                        });
                    }
                }
            }
            FetchResult::Detail { generation, result } => {
                if !self.detail.apply(generation, result) {
                    tracing::debug!(generation, "Dropping stale product");
                }
            }
        }
    }

    /// Fetch the current screen again
    pub fn retry(&mut self) {
        match self.view {
            View::List => self.fetch_list(),
            View::Detail => {
                if let Some((generation, id)) = self.detail.retry() {
                    self.commands.push(Command::FetchDetail { generation, id });
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    pub fn open_detail(&mut self, id: &str) {
        self.view = View::Detail;
        if let Some((generation, id)) = self.detail.open(id) {
            self.commands.push(Command::FetchDetail { generation, id });
        }
    }

    fn open_selected(&mut self) {
        if self.list.display_state() != DisplayState::Ready {
            return;
        }
        if let Some(id) = self.list.selected_product().map(|p| p.id.clone()) {
            self.open_detail(&id);
        }
    }

    /// Leave the detail screen; the list keeps its filters, page and selection
    pub fn back_to_list(&mut self) {
        if self.view == View::Detail {
            self.detail.clear();
            self.commands.push(Command::CancelDetail);
            self.view = View::List;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Debounce a key press; returns true if the action should run
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Keys while the search box is being edited
    pub fn handle_search_input(&mut self, key: KeyEvent) {
        if let Some(action) = self.toolbar.handle_key(key) {
            self.apply_toolbar_action(action);
        }
    }

    /// Route a key to the current screen's components
    pub fn handle_view_key(&mut self, key: KeyEvent) -> Handled {
        match self.view {
            View::List => {
                if let Some(action) = self.toolbar.handle_key(key) {
                    self.apply_toolbar_action(action);
                    return Handled::Yes;
                }
                if let Some(action) = self.pagination.handle_key(key) {
                    self.apply_page_action(action);
                    return Handled::Yes;
                }
                if let Some(action) = self.table.handle_key(key) {
                    self.apply_table_action(action);
                    return Handled::Yes;
                }
                Handled::No
            }
            View::Detail => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    self.back_to_list();
                    Handled::Yes
                }
                _ => Handled::No,
            },
        }
    }

    pub fn apply_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::StartEditing => {}
            ToolbarAction::StopEditing => {
                if self.search_pending() {
                    self.fetch_list();
                }
            }
            ToolbarAction::Input(c) => {
                let mut text = self.list.search.clone();
                text.push(c);
                self.update_search(text);
            }
            ToolbarAction::Backspace => {
                let mut text = self.list.search.clone();
                text.pop();
                self.update_search(text);
            }
            ToolbarAction::ClearSearch => self.update_search(String::new()),
            ToolbarAction::NextCategory => {
                if self.list.cycle_category(true) {
                    self.fetch_list();
                }
            }
            ToolbarAction::PrevCategory => {
                if self.list.cycle_category(false) {
                    self.fetch_list();
                }
            }
            ToolbarAction::NextSortField => {
                let next = self.list.sort_field.next();
                self.list.set_sort_field(next);
            }
            ToolbarAction::ToggleSortOrder => self.list.toggle_sort_order(),
        }
    }

    fn update_search(&mut self, text: String) {
        if self.list.set_search(text) {
            self.schedule_search();
        }
    }

    pub fn apply_page_action(&mut self, action: PageAction) {
        let moved = match action {
            PageAction::Previous => self.list.prev_page(),
            PageAction::Next => self.list.next_page(),
        };
        if moved {
            self.fetch_list();
        }
    }

    pub fn apply_table_action(&mut self, action: TableAction) {
        match action {
            TableAction::SelectNext => self.list.select_next(),
            TableAction::SelectPrev => self.list.select_prev(),
            TableAction::SelectFirst => self.list.select_first(),
            TableAction::SelectLast => self.list.select_last(),
            TableAction::Open => self.open_selected(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// What `y` copies on the current screen: (description, text)
    pub fn copy_payload(&self) -> Option<(&'static str, String)> {
        match self.view {
            View::List => {
                if self.list.display_state() != DisplayState::Ready {
                    return None;
                }
                self.list
                    .selected_product()
                    .map(|p| ("product id", p.id.clone()))
            }
            View::Detail => self
                .detail
                .product
                .as_ref()
                .map(|p| ("product details", product_summary(p))),
        }
    }
}

/// Plain-text description of a product for the clipboard
pub fn product_summary(product: &Product) -> String {
    let mut text = format!(
        "{}\nPrice: {}\nCategory: {}\nStatus: {}\nID: {}",
        product.name,
        format_price(product.price),
        product.category,
        stock_label(product.in_stock),
        product.id
    );
    if let Some(description) = &product.description {
        text.push_str("\n\n");
        text.push_str(description);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, ListQuery, ProductPage, SortField, SortOrder};

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category: "Home".to_string(),
            in_stock: true,
            description: None,
            image_url: None,
        }
    }

    fn app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new(), None);
        app.take_commands();
        app
    }

    /// Answer the most recent list fetch
    fn load(app: &mut App, items: Vec<Product>, total: u64) {
        app.on_fetch_result(FetchResult::List {
            generation: app.list.generation(),
            result: Ok(ProductPage {
                items,
                total,
                page: app.list.page,
                limit: 8,
            }),
        });
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    #[test]
    fn initial_fetch_uses_defaults() {
        let mut app = App::new(&Config::default(), LogBuffer::new(), None);
        assert_eq!(
            app.take_commands(),
            vec![Command::FetchList {
                generation: 1,
                query: ListQuery::default(),
            }]
        );
        assert_eq!(app.view, View::List);
        assert_eq!(app.list.display_state(), DisplayState::Loading);
    }

    #[test]
    fn deep_link_opens_detail() {
        let mut app = App::new(&Config::default(), LogBuffer::new(), Some("42".to_string()));
        let commands = app.take_commands();
        assert_eq!(app.view, View::Detail);
        assert!(commands.contains(&Command::FetchDetail {
            generation: 1,
            id: "42".to_string(),
        }));
    }

    #[test]
    fn blank_deep_link_shows_empty_detail() {
        let mut app = App::new(&Config::default(), LogBuffer::new(), Some(" ".to_string()));
        assert_eq!(app.take_commands().len(), 1);
        assert_eq!(app.detail.display_state(), DisplayState::Empty);
    }

    #[test]
    fn search_is_debounced() {
        let mut app = app();
        app.list.page = 3;

        app.apply_toolbar_action(ToolbarAction::Input('l'));
        app.apply_toolbar_action(ToolbarAction::Input('a'));
        assert!(app.take_commands().is_empty());
        assert!(app.search_pending());
        assert_eq!(app.list.page, 1);

        app.tick_at(Instant::now());
        assert!(app.take_commands().is_empty());

        app.tick_at(later());
        let commands = app.take_commands();
        assert_eq!(commands.len(), 1);
        let Command::FetchList { query, .. } = &commands[0] else {
            panic!("expected list fetch");
        };
        assert_eq!(query.query, "la");
        assert_eq!(query.page, 1);
        assert!(!app.search_pending());
    }

    #[test]
    fn leaving_search_box_fetches_immediately() {
        let mut app = app();
        app.apply_toolbar_action(ToolbarAction::Input('x'));
        app.apply_toolbar_action(ToolbarAction::StopEditing);
        assert_eq!(app.take_commands().len(), 1);

        // Nothing pending: leaving again fetches nothing
        app.apply_toolbar_action(ToolbarAction::StopEditing);
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn zero_debounce_fetches_on_every_keystroke() {
        let config = Config {
            debounce_ms: 0,
            ..Config::default()
        };
        let mut app = App::new(&config, LogBuffer::new(), None);
        app.take_commands();

        app.apply_toolbar_action(ToolbarAction::Input('a'));
        app.apply_toolbar_action(ToolbarAction::Backspace);
        assert_eq!(app.take_commands().len(), 2);
    }

    #[test]
    fn category_change_fetches_first_page() {
        let mut app = app();
        app.list.page = 2;
        app.apply_toolbar_action(ToolbarAction::NextCategory);

        let commands = app.take_commands();
        let [Command::FetchList { query, .. }] = commands.as_slice() else {
            panic!("expected one list fetch, got {:?}", commands);
        };
        assert_eq!(query.category, "Electronics");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn category_change_includes_pending_search() {
        let mut app = app();
        app.apply_toolbar_action(ToolbarAction::Input('q'));
        app.apply_toolbar_action(ToolbarAction::NextCategory);

        let commands = app.take_commands();
        let [Command::FetchList { query, .. }] = commands.as_slice() else {
            panic!("expected one list fetch, got {:?}", commands);
        };
        assert_eq!(query.query, "q");
        assert!(!app.search_pending());
    }

    #[test]
    fn sorting_does_not_fetch() {
        let mut app = app();
        load(&mut app, vec![product("1", "B", 1.0), product("2", "A", 2.0)], 2);

        app.apply_toolbar_action(ToolbarAction::NextSortField);
        app.apply_toolbar_action(ToolbarAction::ToggleSortOrder);
        assert!(app.take_commands().is_empty());
        assert_eq!(app.list.sort_field, SortField::Price);
        assert_eq!(app.list.sort_order, SortOrder::Desc);
        assert_eq!(app.list.items[0].id, "2");
    }

    #[test]
    fn paging_fetches_within_bounds() {
        let mut app = app();
        load(&mut app, vec![product("1", "A", 1.0)], 21);

        app.apply_page_action(PageAction::Previous);
        assert!(app.take_commands().is_empty());

        app.apply_page_action(PageAction::Next);
        let commands = app.take_commands();
        let [Command::FetchList { query, .. }] = commands.as_slice() else {
            panic!("expected one list fetch, got {:?}", commands);
        };
        assert_eq!(query.page, 2);
    }

    #[test]
    fn shrunken_total_triggers_refetch_command() {
        let mut app = app();
        load(&mut app, vec![product("1", "A", 1.0)], 40);
        app.apply_page_action(PageAction::Next);
        app.apply_page_action(PageAction::Next);
        app.take_commands();

        load(&mut app, vec![], 9);
        let commands = app.take_commands();
        let [Command::FetchList { generation, query }] = commands.as_slice() else {
            panic!("expected refetch, got {:?}", commands);
        };
        assert_eq!(query.page, 2);
        assert_eq!(*generation, app.list.generation());
    }

    #[test]
    fn open_and_return_preserves_list() {
        let mut app = app();
        load(&mut app, vec![product("1", "A", 1.0), product("2", "B", 2.0)], 2);
        app.apply_table_action(TableAction::SelectNext);

        app.apply_table_action(TableAction::Open);
        assert_eq!(app.view, View::Detail);
        assert_eq!(
            app.take_commands(),
            vec![Command::FetchDetail {
                generation: 1,
                id: "2".to_string(),
            }]
        );

        app.back_to_list();
        assert_eq!(app.view, View::List);
        assert_eq!(app.take_commands(), vec![Command::CancelDetail]);
        assert_eq!(app.list.selected, 1);
        assert_eq!(app.list.items.len(), 2);
    }

    #[test]
    fn open_is_ignored_without_items() {
        let mut app = app();
        load(&mut app, vec![], 0);
        app.apply_table_action(TableAction::Open);
        assert_eq!(app.view, View::List);
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn retry_refetches_current_screen() {
        let mut app = app();
        app.on_fetch_result(FetchResult::List {
            generation: app.list.generation(),
            result: Err(CatalogError::Network("connection refused".into())),
        });
        assert_eq!(app.list.display_state(), DisplayState::Error);

        app.retry();
        assert_eq!(app.take_commands().len(), 1);
        assert_eq!(app.list.display_state(), DisplayState::Loading);

        app.open_detail("5");
        app.take_commands();
        app.retry();
        assert!(matches!(
            app.take_commands().as_slice(),
            [Command::FetchDetail { id, .. }] if id == "5"
        ));
    }

    #[test]
    fn stale_detail_result_is_ignored() {
        let mut app = app();
        app.open_detail("1");
        app.open_detail("2");
        app.on_fetch_result(FetchResult::Detail {
            generation: 1,
            result: Ok(product("1", "Old", 1.0)),
        });
        assert!(app.detail.product.is_none());
        assert_eq!(app.detail.display_state(), DisplayState::Loading);
    }

    #[test]
    fn copy_payload_per_screen() {
        let mut app = app();
        assert!(app.copy_payload().is_none());

        load(&mut app, vec![product("7", "Lamp", 24.5)], 1);
        assert_eq!(app.copy_payload(), Some(("product id", "7".to_string())));

        app.open_detail("7");
        app.on_fetch_result(FetchResult::Detail {
            generation: 1,
            result: Ok(product("7", "Lamp", 24.5)),
        });
        let (what, text) = app.copy_payload().unwrap();
        assert_eq!(what, "product details");
        assert!(text.starts_with("Lamp\nPrice: $24.50"));
    }

    #[test]
    fn toast_expires_on_tick() {
        let mut app = app();
        app.show_toast("✓ Copied");
        app.tick_at(Instant::now());
        assert!(app.toast.is_some());
        app.tick_at(later());
        assert!(app.toast.is_none());
    }
}
