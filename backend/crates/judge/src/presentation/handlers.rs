//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use levels::LevelRegistry;

use crate::application::claim_certificate::{CertificateStatus, ClaimCertificateUseCase};
use crate::application::config::JudgeConfig;
use crate::application::submit_guess::{SubmitGuessUseCase, SubmitStatus};
use crate::domain::repository::ReplayLedger;
use crate::domain::value_objects::WalletAddress;
use crate::error::{JudgeError, JudgeResult};
use crate::presentation::dto::{
    CertificateRequest, CertificateResponse, SubmitRequest, SubmitResponse,
};

/// Maximum accepted password guess length, in characters
const MAX_PASSWORD_LEN: usize = 100;

/// Shared state for judge handlers
pub struct JudgeAppState<L>
where
    L: ReplayLedger + Send + Sync + 'static,
{
    pub ledger: Arc<L>,
    pub registry: Arc<LevelRegistry>,
    pub config: Arc<JudgeConfig>,
}

// Manual impl: deriving Clone would demand L: Clone
impl<L> Clone for JudgeAppState<L>
where
    L: ReplayLedger + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            registry: self.registry.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/judge/submit
pub async fn submit_guess<L>(
    State(state): State<JudgeAppState<L>>,
    Json(req): Json<SubmitRequest>,
) -> JudgeResult<Json<SubmitResponse>>
where
    L: ReplayLedger + Send + Sync + 'static,
{
    // Empty guesses are a negative verdict, not an error; only oversized
    // input is rejected outright.
    if req.password.chars().count() > MAX_PASSWORD_LEN {
        return Err(JudgeError::SubmissionTooLong);
    }

    let address = WalletAddress::parse(&req.wallet_address)?;

    let use_case = SubmitGuessUseCase::new(
        state.ledger.clone(),
        state.registry.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(req.level, &req.password, address).await?;

    let message = match output.status {
        SubmitStatus::Incorrect => "Incorrect password. Try again!".to_string(),
        SubmitStatus::Completed => format!(
            "Congratulations! You've beaten level {}. Use the signature to mint your NFT.",
            req.level
        ),
        SubmitStatus::AlreadyCompleted => {
            "Level already completed; its mint authorization was already issued.".to_string()
        }
        SubmitStatus::DemoAccepted => {
            "Master override accepted: demo completion recorded, no mint authorization issued."
                .to_string()
        }
    };

    Ok(Json(SubmitResponse {
        correct: output.verdict.correct,
        message,
        mint_authorization: output.authorization.as_ref().map(Into::into),
        nft_metadata: output.nft,
    }))
}

/// POST /api/judge/certificate
pub async fn claim_certificate<L>(
    State(state): State<JudgeAppState<L>>,
    Json(req): Json<CertificateRequest>,
) -> JudgeResult<Json<CertificateResponse>>
where
    L: ReplayLedger + Send + Sync + 'static,
{
    let address = WalletAddress::parse(&req.wallet_address)?;

    let use_case = ClaimCertificateUseCase::new(state.ledger.clone(), state.config.clone());
    let output = use_case.execute(address).await?;

    let (eligible, message) = match output.status {
        CertificateStatus::NotEligible { completed } => (
            false,
            format!(
                "Not eligible yet: {completed} of {} levels genuinely completed.",
                levels::MAX_LEVEL
            ),
        ),
        CertificateStatus::Claimed => (
            true,
            "All levels complete! Use the signature to mint your honor badge.".to_string(),
        ),
        CertificateStatus::AlreadyClaimed => (
            true,
            "Certificate already claimed; its mint authorization was already issued.".to_string(),
        ),
    };

    Ok(Json(CertificateResponse {
        eligible,
        message,
        mint_authorization: output.authorization.as_ref().map(Into::into),
    }))
}
