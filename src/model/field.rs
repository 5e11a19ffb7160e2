use crate::core::store::Model;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ValueChanged { value: String },
}

/// A single text value, replaced wholesale on each change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    value: String,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ValueChanged { value } => {
                self.value = value;
            }
        }
    }
}

impl Model for Field {
    type Message = Message;

    fn update(&mut self, message: Message) {
        Field::update(self, message);
    }
}
