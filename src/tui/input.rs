// Held-key pacing for the catalog screens
//
// Most terminals send only press events, so a held key arrives as a stream
// of presses. Each key falls into a class with its own pacing. Moving the
// selection repeats quickly. Flipping pages repeats slowly because every flip
// is a request. Anything else fires once per hold and re-arms after 150ms
// for terminals that never report a release.
//
// Text entry in the search box bypasses this entirely.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a held one-shot key waits before it may fire again
const REARM: Duration = Duration::from_millis(150);

/// What a key does on the catalog screens, as far as pacing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Moves the table selection by one row
    Row,
    /// Previous or next page, each one a fetch
    Page,
    /// Jumps the selection to an edge of the table
    Jump,
    /// Opens, closes, toggles or requests something
    Action,
}

impl KeyClass {
    pub fn of(key: KeyCode) -> Self {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j' | 'k') => Self::Row,
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h' | 'l' | '[' | ']') => Self::Page,
            KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End => Self::Jump,
            _ => Self::Action,
        }
    }

    /// Delay before a held key starts repeating, and the gap between repeats.
    /// `None` for keys that never repeat.
    fn repeat(self) -> Option<(Duration, Duration)> {
        let ms = Duration::from_millis;
        match self {
            Self::Row => Some((ms(500), ms(50))),
            Self::Page => Some((ms(500), ms(250))),
            Self::Jump => Some((ms(300), ms(30))),
            Self::Action => None,
        }
    }
}

#[derive(Debug)]
struct Hold {
    since: Instant,
    last_fired: Instant,
}

/// Decides which raw presses become actions
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Hold>,
}

impl InputHandler {
    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let Some(hold) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Hold {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let due = match KeyClass::of(key).repeat() {
            Some((delay, gap)) => {
                now.duration_since(hold.since) >= delay
                    && now.duration_since(hold.last_fired) >= gap
            }
            None => now.duration_since(hold.last_fired) >= REARM,
        };
        if due {
            hold.last_fired = now;
        }
        due
    }
}
