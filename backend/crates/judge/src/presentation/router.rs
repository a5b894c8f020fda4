//! Judge Router

use std::sync::Arc;

use axum::{Router, routing::post};
use levels::LevelRegistry;

use crate::application::config::JudgeConfig;
use crate::domain::repository::ReplayLedger;
use crate::presentation::handlers::{self, JudgeAppState};

/// Create the judge router for any replay-ledger implementation
pub fn judge_router<L>(
    ledger: Arc<L>,
    registry: Arc<LevelRegistry>,
    config: JudgeConfig,
) -> Router
where
    L: ReplayLedger + Send + Sync + 'static,
{
    let state = JudgeAppState {
        ledger,
        registry,
        config: Arc::new(config),
    };

    Router::new()
        .route("/submit", post(handlers::submit_guess::<L>))
        .route("/certificate", post(handlers::claim_certificate::<L>))
        .with_state(state)
}
