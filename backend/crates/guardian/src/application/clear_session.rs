//! Clear Session Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::SessionRepository;
use crate::error::GuardianResult;

/// Clear Session Use Case
pub struct ClearSessionUseCase<S>
where
    S: SessionRepository,
{
    sessions: Arc<S>,
}

impl<S> ClearSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(sessions: Arc<S>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, session_id: Uuid) -> GuardianResult<()> {
        self.sessions.delete(session_id).await?;
        tracing::debug!(%session_id, "Session deleted");
        Ok(())
    }
}
