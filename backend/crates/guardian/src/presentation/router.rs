//! Guardian Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, post},
};
use levels::LevelRegistry;
use platform::llm::ChatModel;

use crate::application::config::GuardianConfig;
use crate::domain::repository::SessionRepository;
use crate::presentation::handlers::{self, GuardianAppState};

/// Create the guardian router for any model/session-store implementation
pub fn guardian_router<M, S>(
    model: Arc<M>,
    sessions: Arc<S>,
    registry: Arc<LevelRegistry>,
    config: GuardianConfig,
) -> Router
where
    M: ChatModel + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let state = GuardianAppState {
        model,
        sessions,
        registry,
        config: Arc::new(config),
    };

    Router::new()
        .route("/chat", post(handlers::chat::<M, S>))
        .route(
            "/sessions/{session_id}",
            delete(handlers::delete_session::<M, S>),
        )
        .with_state(state)
}
