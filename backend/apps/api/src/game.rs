//! Game Status Endpoints
//!
//! Public level information: guard tags, difficulty, hint pricing and NFT
//! tier. Secrets and persona prompts never appear here.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use kernel::error::app_error::{AppError, AppResult};
use levels::{LevelConfig, LevelRegistry};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelInfo {
    level: u8,
    difficulty: &'static str,
    input_guard: &'static str,
    output_guard: &'static str,
    hint_count: usize,
    hint_base_price: f64,
    nft_tier: &'static str,
}

impl From<&LevelConfig> for LevelInfo {
    fn from(config: &LevelConfig) -> Self {
        Self {
            level: config.level,
            difficulty: config.difficulty().as_str(),
            input_guard: config.input_guard.as_str(),
            output_guard: config.output_guard.as_str(),
            hint_count: config.hints.len(),
            hint_base_price: config.hint_base_price,
            nft_tier: config.tier().as_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameStatus {
    levels: Vec<LevelInfo>,
    total_levels: usize,
}

pub fn game_router(registry: Arc<LevelRegistry>) -> Router {
    Router::new()
        .route("/status", get(game_status))
        .route("/levels/{level}", get(level_info))
        .with_state(registry)
}

/// GET /api/game/status
async fn game_status(State(registry): State<Arc<LevelRegistry>>) -> Json<GameStatus> {
    let levels: Vec<LevelInfo> = registry.iter().map(Into::into).collect();
    Json(GameStatus {
        total_levels: levels.len(),
        levels,
    })
}

/// GET /api/game/levels/{level}
async fn level_info(
    State(registry): State<Arc<LevelRegistry>>,
    Path(level): Path<u8>,
) -> AppResult<Json<LevelInfo>> {
    let config = registry
        .get(level)
        .map_err(|e| AppError::not_found(e.to_string()))?;
    Ok(Json(config.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_info_exposes_no_secret() {
        let registry = LevelRegistry::builtin();
        let info = LevelInfo::from(registry.get(1).unwrap());

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#""nftTier":"Bronze""#));
        assert!(json.contains(r#""inputGuard":"none""#));
        assert!(!json.contains("SUNSHINE"));
    }

    #[test]
    fn test_guard_tags_render_for_hard_levels() {
        let registry = LevelRegistry::builtin();
        let info = LevelInfo::from(registry.get(7).unwrap());

        assert_eq!(info.input_guard, "llm_and_blacklist");
        assert_eq!(info.output_guard, "llm_and_blacklist");
        assert_eq!(info.difficulty, "Hard");
    }
}
