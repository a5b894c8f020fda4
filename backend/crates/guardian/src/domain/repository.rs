//! Repository Traits
//!
//! Interface for conversation persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entities::ChatMessage;
use crate::error::GuardianResult;
use uuid::Uuid;

/// Conversation session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Resolve a session id: an existing id is returned as-is, an unknown or
    /// absent one yields a freshly created session under a server-generated
    /// id (client-supplied identifiers are never adopted).
    async fn get_or_create(&self, id: Option<Uuid>) -> GuardianResult<Uuid>;

    /// Messages of a session in conversational order; empty for an unknown id
    async fn history(&self, id: Uuid) -> GuardianResult<Vec<ChatMessage>>;

    /// Append one guard-approved turn (player message + guardian reply).
    /// A turn for a session deleted mid-flight is dropped silently.
    async fn append_turn(
        &self,
        id: Uuid,
        user: ChatMessage,
        assistant: ChatMessage,
    ) -> GuardianResult<()>;

    /// Delete a session; deleting an unknown id is not an error
    async fn delete(&self, id: Uuid) -> GuardianResult<()>;
}
