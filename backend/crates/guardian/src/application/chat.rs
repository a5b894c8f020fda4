//! Chat Turn Use Case

use std::sync::Arc;

use levels::LevelRegistry;
use platform::llm::{ChatModel, ChatTurn};
use uuid::Uuid;

use crate::application::config::GuardianConfig;
use crate::application::guard::GuardEngine;
use crate::domain::entities::ChatMessage;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{BlockReason, Direction, GuardDecision};
use crate::error::{GuardianError, GuardianResult};

/// Output DTO for one chat turn
#[derive(Debug, Clone)]
pub struct ChatOutput {
    pub session_id: Uuid,
    pub message: String,
    pub blocked: bool,
    pub block_reason: Option<BlockReason>,
}

/// Chat Turn Use Case
///
/// Input guard → model call → output guard → session append. Blocked turns
/// substitute the canned refusal; a blocked inbound message never reaches
/// the model and is not recorded.
pub struct ChatUseCase<M, S>
where
    M: ChatModel + Send + Sync,
    S: SessionRepository,
{
    model: Arc<M>,
    sessions: Arc<S>,
    registry: Arc<LevelRegistry>,
    config: Arc<GuardianConfig>,
    guard: GuardEngine<M>,
}

impl<M, S> ChatUseCase<M, S>
where
    M: ChatModel + Send + Sync,
    S: SessionRepository + Sync,
{
    pub fn new(
        model: Arc<M>,
        sessions: Arc<S>,
        registry: Arc<LevelRegistry>,
        config: Arc<GuardianConfig>,
    ) -> Self {
        let guard = GuardEngine::new(model.clone(), config.clone());
        Self {
            model,
            sessions,
            registry,
            config,
            guard,
        }
    }

    pub async fn execute(
        &self,
        level: u8,
        message: &str,
        session_id: Option<Uuid>,
    ) -> GuardianResult<ChatOutput> {
        let level_config = self.registry.get(level)?;
        let session_id = self.sessions.get_or_create(session_id).await?;

        if let GuardDecision::Block(reason) = self
            .guard
            .evaluate(Direction::Input, level_config, message)
            .await
        {
            tracing::info!(
                level,
                %session_id,
                reason = reason.as_str(),
                "Inbound message blocked"
            );
            return Ok(ChatOutput {
                session_id,
                message: self.config.refusal_message.clone(),
                blocked: true,
                block_reason: Some(reason),
            });
        }

        // History is snapshotted before the call; no session lock is held
        // while the provider is in flight.
        let history = self.sessions.history(session_id).await?;
        let mut turns = Vec::with_capacity(history.len() + 2);
        turns.push(ChatTurn::system(level_config.system_prompt));
        turns.extend(history.iter().map(ChatMessage::to_turn));
        turns.push(ChatTurn::user(message));

        let reply =
            match tokio::time::timeout(self.config.chat_timeout, self.model.complete(&turns)).await
            {
                Ok(Ok(reply)) => reply,
                Ok(Err(e)) => return Err(GuardianError::ModelUnavailable(e.to_string())),
                Err(_) => {
                    return Err(GuardianError::ModelUnavailable(
                        "chat completion timed out".to_string(),
                    ));
                }
            };

        let (shown, blocked, block_reason) = match self
            .guard
            .evaluate(Direction::Output, level_config, &reply)
            .await
        {
            GuardDecision::Allow => (reply, false, None),
            GuardDecision::Block(reason) => {
                tracing::info!(
                    level,
                    %session_id,
                    reason = reason.as_str(),
                    "Outbound reply blocked"
                );
                // The raw reply is discarded; only the refusal enters history.
                (self.config.refusal_message.clone(), true, Some(reason))
            }
        };

        self.sessions
            .append_turn(
                session_id,
                ChatMessage::user(message),
                ChatMessage::assistant(shown.clone()),
            )
            .await?;

        Ok(ChatOutput {
            session_id,
            message: shown,
            blocked,
            block_reason,
        })
    }
}
