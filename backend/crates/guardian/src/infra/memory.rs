//! In-Memory Session Store
//!
//! Sessions live for the process lifetime or until explicit deletion; no
//! persistence guarantee. The outer map lock is held only for lookups and
//! membership changes; message access goes through a per-session mutex so
//! one busy conversation cannot stall the rest.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::entities::{ChatMessage, ChatSession};
use crate::domain::repository::SessionRepository;
use crate::error::GuardianResult;

/// In-memory session repository
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<ChatSession>>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions (diagnostics)
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl SessionRepository for InMemorySessionStore {
    async fn get_or_create(&self, id: Option<Uuid>) -> GuardianResult<Uuid> {
        if let Some(id) = id {
            if self.sessions.read().await.contains_key(&id) {
                return Ok(id);
            }
        }

        // Unknown or absent id: never adopt the client's value
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(ChatSession::new(id))));
        tracing::debug!(%id, "Created chat session");
        Ok(id)
    }

    async fn history(&self, id: Uuid) -> GuardianResult<Vec<ChatMessage>> {
        let session = self.sessions.read().await.get(&id).cloned();
        match session {
            Some(session) => Ok(session.lock().await.messages.clone()),
            None => Ok(Vec::new()),
        }
    }

    async fn append_turn(
        &self,
        id: Uuid,
        user: ChatMessage,
        assistant: ChatMessage,
    ) -> GuardianResult<()> {
        let session = self.sessions.read().await.get(&id).cloned();
        match session {
            Some(session) => {
                let mut session = session.lock().await;
                session.push(user);
                session.push(assistant);
            }
            None => {
                tracing::debug!(%id, "Dropping turn for deleted session");
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> GuardianResult<()> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_or_create_fresh() {
        let store = InMemorySessionStore::new();
        let id = store.get_or_create(None).await.unwrap();
        assert_eq!(store.session_count().await, 1);
        assert!(store.history(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_client_id_is_not_adopted() {
        let store = InMemorySessionStore::new();
        let bogus = Uuid::new_v4();
        let id = store.get_or_create(Some(bogus)).await.unwrap();
        assert_ne!(id, bogus);
    }

    #[tokio::test]
    async fn test_existing_id_is_reused() {
        let store = InMemorySessionStore::new();
        let id = store.get_or_create(None).await.unwrap();
        let again = store.get_or_create(Some(id)).await.unwrap();
        assert_eq!(id, again);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = InMemorySessionStore::new();
        let id = store.get_or_create(None).await.unwrap();

        store
            .append_turn(id, ChatMessage::user("a"), ChatMessage::assistant("b"))
            .await
            .unwrap();
        store
            .append_turn(id, ChatMessage::user("c"), ChatMessage::assistant("d"))
            .await
            .unwrap();

        let contents: Vec<_> = store
            .history(id)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.content)
            .collect();
        assert_eq!(contents, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_delete_clears_history() {
        let store = InMemorySessionStore::new();
        let id = store.get_or_create(None).await.unwrap();
        store
            .append_turn(id, ChatMessage::user("a"), ChatMessage::assistant("b"))
            .await
            .unwrap();

        store.delete(id).await.unwrap();
        assert_eq!(store.session_count().await, 0);
        assert!(store.history(id).await.unwrap().is_empty());

        // Deleting again is fine
        store.delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_append_to_deleted_session_is_dropped() {
        let store = InMemorySessionStore::new();
        let id = store.get_or_create(None).await.unwrap();
        store.delete(id).await.unwrap();

        store
            .append_turn(id, ChatMessage::user("a"), ChatMessage::assistant("b"))
            .await
            .unwrap();
        assert!(store.history(id).await.unwrap().is_empty());
    }
}
