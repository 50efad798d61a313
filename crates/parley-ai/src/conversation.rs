//! The ordered chat transcript.

use crate::Message;

/// Ordered, role-tagged transcript owned by one chat session.
///
/// Only two mutations exist: [`append`](Self::append) and
/// [`rollback_last`](Self::rollback_last). Remote calls work on a
/// [`snapshot`](Self::snapshot), never on the live sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove exactly the most recently appended message.
    pub fn rollback_last(&mut self) -> Option<Message> {
        self.messages.pop()
    }

    /// Owned copy for an in-flight request.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[cfg(test)]
    pub(crate) fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}
