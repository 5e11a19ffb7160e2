//! Controlled text input
//!
//! The displayed text is always the `value` prop. Key presses are applied to a
//! throwaway `TextArea` seeded with that value and the result is forwarded to
//! `on_change`; nothing is kept between renders.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{callback::Callback, element::Element};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputProps {
    pub value: String,
    pub on_change: Option<Callback<String>>,
}

impl InputProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_change: None,
        }
    }

    pub fn on_change(mut self, callback: Callback<String>) -> Self {
        self.on_change = Some(callback);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Input;

impl Input {
    pub fn render(props: InputProps) -> Element {
        Element::Input {
            value: props.value,
            on_change: props.on_change,
        }
    }

    /// Apply one key press to `value`.
    ///
    /// Returns the edited text, or `None` when the key leaves the value unchanged.
    /// The field is single-line, so Enter is ignored.
    pub fn edit(value: &str, key: KeyEvent) -> Option<String> {
        if key.kind == KeyEventKind::Release || key.code == KeyCode::Enter {
            return None;
        }

        let mut textarea = TextArea::from([value]);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        textarea.input(key);

        let edited = textarea.lines().concat();
        (edited != value).then_some(edited)
    }

    /// Forward a key press as a change notification.
    ///
    /// Returns true when `on_change` was invoked.
    pub fn change(value: &str, on_change: Option<&Callback<String>>, key: KeyEvent) -> bool {
        match Self::edit(value, key) {
            Some(edited) => Self::notify(on_change, edited),
            None => false,
        }
    }

    /// Forward pasted text, appended to `value` with line breaks removed.
    pub fn paste(value: &str, on_change: Option<&Callback<String>>, text: &str) -> bool {
        let pasted: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if pasted.is_empty() {
            return false;
        }
        Self::notify(on_change, format!("{value}{pasted}"))
    }

    fn notify(on_change: Option<&Callback<String>>, value: String) -> bool {
        match on_change {
            Some(callback) => {
                callback.emit(value);
                true
            }
            None => {
                tracing::warn!("input edited without an on_change handler; edit dropped");
                false
            }
        }
    }
}
