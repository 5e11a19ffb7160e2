use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Host-level intents, produced from terminal events and keybindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Render,
    Resize(u16, u16),
    Quit,
    FocusNext,
    FocusPrev,
    Activate,
    Key(KeyEvent),
    Paste(String),
    Error(String),
}
