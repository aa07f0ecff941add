//! Contracts implemented by interactive UI components
//!
//! Components translate raw key events into their own action type and hand
//! those actions back to the App. They never mutate list or detail state
//! directly: the App owns that state and the components render what it holds.
//!
//! ```text
//! KeyEvent ──► App (modal, global keys)
//!                │ not handled
//!                ▼
//!          focused component ──► Option<Action> ──► App applies it
//! ```

mod interactive;

pub use interactive::{Handled, Interactive};
