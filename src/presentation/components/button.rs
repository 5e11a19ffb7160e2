//! Action trigger
//!
//! A stateless, clickable control. Activation invokes the caller's callback if
//! one was supplied and does nothing otherwise.

use crate::core::{callback::Callback, element::Element};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonProps {
    pub label: String,
    pub on_activate: Option<Callback<()>>,
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_activate: None,
        }
    }

    pub fn on_activate(mut self, callback: Callback<()>) -> Self {
        self.on_activate = Some(callback);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Button;

impl Button {
    pub fn render(props: ButtonProps) -> Element {
        Element::Button {
            label: props.label,
            on_activate: props.on_activate,
        }
    }

    pub fn activate(on_activate: Option<&Callback<()>>) {
        match on_activate {
            Some(callback) => callback.emit(()),
            None => log::debug!("button activated without a callback"),
        }
    }
}
