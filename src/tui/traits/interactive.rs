//! Interactive trait for components that handle keyboard input

use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the caller whether the event was consumed or should bubble up
/// to the next layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
///
/// `handle_key` returns `Some(action)` when the key meant something to the
/// component and `None` when it should bubble up to the App.
///
/// # Example
///
/// ```ignore
/// impl Interactive for Pagination {
///     type Action = PageAction;
///
///     fn handle_key(&mut self, key: KeyEvent) -> Option<PageAction> {
///         match key.code {
///             KeyCode::Left => Some(PageAction::Previous),
///             KeyCode::Right => Some(PageAction::Next),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Interactive {
    /// What the component asks the App to do
    type Action;

    /// Translate a key event into an action
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Action>;

    /// Keybind hints for the status bar while this component has the keys
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
