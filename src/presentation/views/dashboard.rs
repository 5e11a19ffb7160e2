use crate::{
    core::{
        element::Element,
        store::{Store, SubscriptionId},
    },
    model::field::{Field, Message},
    presentation::{
        components::{Button, ButtonProps, Input, InputProps},
        views::View,
    },
};

/// A text field bound to local state, followed by a Submit button.
///
/// Submit has no handler yet: activating it changes nothing. Wire it through
/// `ButtonProps::on_activate` once there is somewhere to send the value.
#[derive(Debug, Default)]
pub struct Dashboard {
    store: Store<Field>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &Store<Field> {
        &self.store
    }

    pub fn render(&self) -> Element {
        let value = self.store.state().value().to_owned();
        let on_change = self
            .store
            .dispatcher()
            .callback(|value: String| Message::ValueChanged { value });

        Element::div([
            Input::render(InputProps::new(value).on_change(on_change)),
            Button::render(ButtonProps::new("Submit")),
        ])
    }
}

impl View for Dashboard {
    fn name(&self) -> &'static str {
        "Dashboard"
    }

    fn render(&self) -> Element {
        Dashboard::render(self)
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> SubscriptionId {
        self.store.subscribe(listener)
    }
}
