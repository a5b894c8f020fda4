//! Submit Guess Use Case

use std::sync::Arc;

use levels::{LevelRegistry, NftMetadata};

use crate::application::config::JudgeConfig;
use crate::application::issue_authorization::IssueAuthorizationUseCase;
use crate::domain::entities::{CompletionRecord, MintAuthorization};
use crate::domain::repository::ReplayLedger;
use crate::domain::services::judge_submission;
use crate::domain::value_objects::{CompletionKind, Verdict, WalletAddress};
use crate::error::{JudgeError, JudgeResult};

/// Outcome classification of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Wrong guess; nothing changed
    Incorrect,
    /// First genuine completion; a fresh authorization was issued
    Completed,
    /// (user, level) was already completed; no new authorization
    AlreadyCompleted,
    /// Master override: demo completion recorded, no authorization
    DemoAccepted,
}

/// Output DTO for submit guess
#[derive(Debug, Clone)]
pub struct SubmitGuessOutput {
    pub verdict: Verdict,
    pub status: SubmitStatus,
    pub authorization: Option<MintAuthorization>,
    pub nft: Option<NftMetadata>,
}

/// Submit Guess Use Case
///
/// Verdict first (pure), then the replay-ledger transition, then issuance.
/// The atomic `record_completion` insert is the arbiter under concurrency:
/// of two racing correct submissions exactly one observes `true` and issues.
pub struct SubmitGuessUseCase<L>
where
    L: ReplayLedger,
{
    ledger: Arc<L>,
    registry: Arc<LevelRegistry>,
    config: Arc<JudgeConfig>,
    issuer: IssueAuthorizationUseCase<L>,
}

impl<L> SubmitGuessUseCase<L>
where
    L: ReplayLedger,
{
    pub fn new(ledger: Arc<L>, registry: Arc<LevelRegistry>, config: Arc<JudgeConfig>) -> Self {
        let issuer = IssueAuthorizationUseCase::new(ledger.clone(), config.clone());
        Self {
            ledger,
            registry,
            config,
            issuer,
        }
    }

    pub async fn execute(
        &self,
        level: u8,
        submitted: &str,
        address: WalletAddress,
    ) -> JudgeResult<SubmitGuessOutput> {
        let level_config = self.registry.get(level)?;

        let verdict = judge_submission(level_config, submitted);

        if !verdict.correct {
            tracing::debug!(level, user = %address, "Incorrect guess");
            return Ok(SubmitGuessOutput {
                verdict,
                status: SubmitStatus::Incorrect,
                authorization: None,
                nft: None,
            });
        }

        if verdict.is_master_override() {
            // Recorded as a distinct demo completion; deliberately excluded
            // from genuine on-chain rewards and from certificate eligibility.
            let record = CompletionRecord::new(address, level, CompletionKind::Demo);
            let fresh = self.ledger.record_completion(&record).await?;
            tracing::info!(level, user = %address, fresh, "Master override accepted");
            return Ok(SubmitGuessOutput {
                verdict,
                status: SubmitStatus::DemoAccepted,
                authorization: None,
                nft: None,
            });
        }

        // Fail closed before the ledger transition: recording a completion
        // we can never sign for would strand the player.
        if self.config.signer.is_none() {
            return Err(JudgeError::SigningUnavailable);
        }

        let record = CompletionRecord::new(address, level, CompletionKind::Genuine);
        if !self.ledger.record_completion(&record).await? {
            tracing::info!(level, user = %address, "Repeat submission for completed level");
            return Ok(SubmitGuessOutput {
                verdict,
                status: SubmitStatus::AlreadyCompleted,
                authorization: None,
                nft: None,
            });
        }

        let authorization = self.issuer.execute(address, level).await?;

        Ok(SubmitGuessOutput {
            verdict,
            status: SubmitStatus::Completed,
            authorization: Some(authorization),
            nft: Some(level_config.nft.clone()),
        })
    }
}
