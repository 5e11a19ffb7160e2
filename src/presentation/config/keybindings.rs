use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};

use crate::action::Action;

/// Flat mapping from a single key press to a host action
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<&Action> {
        self.0.get(&normalize(key))
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (normalize(&key), action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Strip the parts of a key event that bindings ignore (kind, state, implied shift).
fn normalize(key: &KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    match key.code {
        KeyCode::BackTab => modifiers.remove(KeyModifiers::SHIFT),
        KeyCode::Char(c) if c.is_ascii_uppercase() => modifiers.remove(KeyModifiers::SHIFT),
        _ => {}
    }
    KeyEvent::new(key.code, modifiers)
}

/// Parse a key in `<ctrl-c>` / `q` notation.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(raw);
    if inner.is_empty() {
        return Err(format!("Empty key binding: {raw}"));
    }
    let (remaining, modifiers) = extract_modifiers(inner);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lower = current.to_ascii_lowercase();
        let prefix = ["ctrl-", "alt-", "shift-"]
            .into_iter()
            .find(|prefix| lower.starts_with(prefix) && current.len() > prefix.len());
        match prefix {
            Some("ctrl-") => modifiers.insert(KeyModifiers::CONTROL),
            Some("alt-") => modifiers.insert(KeyModifiers::ALT),
            Some(_) => modifiers.insert(KeyModifiers::SHIFT),
            None => break,
        }
        current = &current[prefix.map_or(0, str::len)..];
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    let c = if modifiers.contains(KeyModifiers::SHIFT) {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    };
                    KeyCode::Char(c)
                }
                _ => return Err(format!("Unable to parse {raw}")),
            }
        }
    };
    Ok(KeyEvent::new(c, modifiers))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<q>", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case("q", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case("<Enter>", KeyCode::Enter, KeyModifiers::NONE)]
    #[case("<Tab>", KeyCode::Tab, KeyModifiers::NONE)]
    #[case("<ctrl-c>", KeyCode::Char('c'), KeyModifiers::CONTROL)]
    #[case("<Ctrl-Alt-x>", KeyCode::Char('x'), KeyModifiers::CONTROL.union(KeyModifiers::ALT))]
    #[case("<shift-a>", KeyCode::Char('A'), KeyModifiers::SHIFT)]
    #[case("<BackTab>", KeyCode::BackTab, KeyModifiers::SHIFT)]
    #[case("<f5>", KeyCode::F(5), KeyModifiers::NONE)]
    #[case("<space>", KeyCode::Char(' '), KeyModifiers::NONE)]
    #[case("<->", KeyCode::Char('-'), KeyModifiers::NONE)]
    fn test_parse_key_event(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(parse_key_event(raw), Ok(KeyEvent::new(code, modifiers)));
    }

    #[rstest]
    #[case("<>")]
    #[case("<notakey>")]
    #[case("<ctrl-zz>")]
    fn test_parse_key_event_errors(#[case] raw: &str) {
        assert!(parse_key_event(raw).is_err());
    }

    #[test]
    fn test_deserialize_and_lookup() -> Result<(), json5::Error> {
        let bindings: KeyBindings = json5::from_str(
            r#"{ "<q>": "Quit", "<Tab>": "FocusNext", "<BackTab>": "FocusPrev" }"#,
        )?;

        assert_eq!(bindings.len(), 3);
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(&Action::Quit)
        );
        // Terminals report Shift+Tab as BackTab, with or without SHIFT
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(&Action::FocusPrev)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE)),
            Some(&Action::FocusPrev)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_bad_key() {
        let result: Result<KeyBindings, _> = json5::from_str(r#"{ "<nope>": "Quit" }"#);
        assert!(result.is_err());
    }
}
