//! Domain Entities
//!
//! Conversation state owned by the session store.

use chrono::{DateTime, Utc};
use platform::llm::ChatTurn;
use serde::Serialize;
use uuid::Uuid;

/// Author of one conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message of a conversation (the system prompt is injected per call,
/// never stored)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Convert into the provider wire format
    pub fn to_turn(&self) -> ChatTurn {
        match self.role {
            Role::User => ChatTurn::user(self.content.clone()),
            Role::Assistant => ChatTurn::assistant(self.content.clone()),
        }
    }
}

/// ChatSession entity - one ongoing conversation for one level context
///
/// Messages are append-only; their order is the conversational order.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut session = ChatSession::new(Uuid::new_v4());
        session.push(ChatMessage::user("first"));
        session.push(ChatMessage::assistant("second"));
        session.push(ChatMessage::user("third"));

        let contents: Vec<_> = session.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_to_turn_maps_roles() {
        let turn = ChatMessage::user("hi").to_turn();
        assert_eq!(turn.role, platform::llm::ChatRole::User);

        let turn = ChatMessage::assistant("hello").to_turn();
        assert_eq!(turn.role, platform::llm::ChatRole::Assistant);
    }
}
