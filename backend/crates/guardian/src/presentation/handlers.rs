//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use levels::LevelRegistry;
use platform::llm::ChatModel;
use uuid::Uuid;

use crate::application::chat::ChatUseCase;
use crate::application::clear_session::ClearSessionUseCase;
use crate::application::config::{GuardianConfig, MAX_MESSAGE_LEN};
use crate::domain::repository::SessionRepository;
use crate::error::{GuardianError, GuardianResult};
use crate::presentation::dto::{ChatRequest, ChatResponse};

/// Shared state for guardian handlers
pub struct GuardianAppState<M, S>
where
    M: ChatModel + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    pub model: Arc<M>,
    pub sessions: Arc<S>,
    pub registry: Arc<LevelRegistry>,
    pub config: Arc<GuardianConfig>,
}

// Manual impl: deriving Clone would demand M: Clone and S: Clone
impl<M, S> Clone for GuardianAppState<M, S>
where
    M: ChatModel + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            sessions: self.sessions.clone(),
            registry: self.registry.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/guardian/chat
pub async fn chat<M, S>(
    State(state): State<GuardianAppState<M, S>>,
    Json(req): Json<ChatRequest>,
) -> GuardianResult<Json<ChatResponse>>
where
    M: ChatModel + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    if req.message.trim().is_empty() || req.message.chars().count() > MAX_MESSAGE_LEN {
        return Err(GuardianError::InvalidMessage);
    }

    let use_case = ChatUseCase::new(
        state.model.clone(),
        state.sessions.clone(),
        state.registry.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(req.level, &req.message, req.session_id)
        .await?;

    Ok(Json(ChatResponse {
        message: output.message,
        blocked: output.blocked,
        block_reason: output.block_reason.map(|r| r.as_str()),
        session_id: output.session_id,
    }))
}

/// DELETE /api/guardian/sessions/{session_id}
pub async fn delete_session<M, S>(
    State(state): State<GuardianAppState<M, S>>,
    Path(session_id): Path<Uuid>,
) -> GuardianResult<impl IntoResponse>
where
    M: ChatModel + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let use_case = ClearSessionUseCase::new(state.sessions.clone());
    use_case.execute(session_id).await?;

    tracing::info!(%session_id, "Chat session cleared");

    Ok(StatusCode::NO_CONTENT)
}
