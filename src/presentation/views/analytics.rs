use crate::{
    core::{
        element::Element,
        store::{Store, SubscriptionId},
    },
    model::event_log::{EventLog, Message},
    presentation::{
        components::{Button, ButtonProps},
        views::View,
    },
};

/// Event tracker: shows how many events were tracked and a button to track one more.
#[derive(Debug, Default)]
pub struct Analytics {
    store: Store<EventLog>,
}

impl Analytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &Store<EventLog> {
        &self.store
    }

    pub fn render(&self) -> Element {
        let count = self.store.state().count();
        let track = self
            .store
            .dispatcher()
            .callback(|_: ()| Message::EventTracked { now: None });

        Element::div([
            Element::paragraph(format!("Events: {count}")),
            Button::render(ButtonProps::new("Track Event").on_activate(track)),
        ])
    }
}

impl View for Analytics {
    fn name(&self) -> &'static str {
        "Analytics"
    }

    fn render(&self) -> Element {
        Analytics::render(self)
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> SubscriptionId {
        self.store.subscribe(listener)
    }
}
