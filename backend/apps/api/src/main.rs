//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use guardian::{GuardianConfig, InMemorySessionStore, guardian_router};
use judge::{InMemoryReplayLedger, JudgeConfig, WalletAddress, judge_router};
use levels::LevelRegistry;
use platform::llm::OpenAiCompatClient;
use platform::signer::EthSigner;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod game;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,guardian=info,judge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Secret registry: loaded once, shared read-only
    let registry = Arc::new(LevelRegistry::builtin());
    tracing::info!(levels = registry.len(), "Level registry loaded");

    // LLM provider selection is a configuration-time decision
    let provider = env::var("LLM_PROVIDER").unwrap_or_else(|_| "deepseek".to_string());
    let api_key = match provider.as_str() {
        "deepseek" => env::var("DEEPSEEK_API_KEY"),
        "openrouter" => env::var("OPENROUTER_API_KEY"),
        _ => env::var("OPENAI_API_KEY"),
    }
    .unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!(provider, "No API key configured for the LLM provider");
    }
    let model = Arc::new(OpenAiCompatClient::for_provider(
        &provider,
        api_key,
        env::var("LLM_MODEL").ok(),
    ));
    tracing::info!(provider, model = model.model(), "Chat model configured");

    // NFT contract bound into every signed authorization
    let contract_address = match env::var("NFT_CONTRACT_ADDRESS") {
        Ok(s) if !s.trim().is_empty() => s.parse::<WalletAddress>()?,
        _ => WalletAddress::ZERO,
    };

    // Signing key is optional at startup; without it, issuance fails closed
    // per request while chat and verdicts keep working
    let judge_config = match env::var("SIGNER_PRIVATE_KEY") {
        Ok(hex_key) if !hex_key.trim().is_empty() => {
            let signer = EthSigner::from_hex(&hex_key)?;
            tracing::info!(
                signer = %platform::crypto::eip55_checksum(&signer.address()),
                contract = %contract_address,
                "Mint signer loaded"
            );
            JudgeConfig {
                signer: Some(signer),
                contract_address,
                ..Default::default()
            }
        }
        _ => {
            tracing::warn!("SIGNER_PRIVATE_KEY not set; mint authorization issuance is disabled");
            JudgeConfig {
                signer: None,
                contract_address,
                ..Default::default()
            }
        }
    };

    // Mutable shared state, in-memory for the process lifetime
    let sessions = Arc::new(InMemorySessionStore::new());
    let ledger = Arc::new(InMemoryReplayLedger::new());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/game", game::game_router(registry.clone()))
        .nest(
            "/api/guardian",
            guardian_router(
                model,
                sessions,
                registry.clone(),
                GuardianConfig::default(),
            ),
        )
        .nest("/api/judge", judge_router(ledger, registry, judge_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "seed-hunter" }))
}
