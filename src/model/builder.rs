use super::Message;

/// Fluent construction of a [`Message`] draft. The identity is never set
/// here; the store assigns it on create.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.message.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.message.content = Some(content.into());
        self
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.message.sender = Some(sender.into());
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
