//! Claim Certificate Use Case
//!
//! The honor-badge certificate is issued at the reserved pseudo-level once
//! every playable level has a genuine completion. Demo (override) completions
//! do not count.

use std::collections::HashSet;
use std::sync::Arc;

use levels::{CERTIFICATE_LEVEL, MAX_LEVEL, MIN_LEVEL};

use crate::application::config::JudgeConfig;
use crate::application::issue_authorization::IssueAuthorizationUseCase;
use crate::domain::entities::{CompletionRecord, MintAuthorization};
use crate::domain::repository::ReplayLedger;
use crate::domain::value_objects::{CompletionKind, WalletAddress};
use crate::error::{JudgeError, JudgeResult};

/// Outcome classification of a certificate claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateStatus {
    /// Fewer than all levels genuinely completed
    NotEligible { completed: usize },
    /// Certificate authorization issued
    Claimed,
    /// Certificate was already claimed; no new authorization
    AlreadyClaimed,
}

/// Output DTO for claim certificate
#[derive(Debug, Clone)]
pub struct ClaimCertificateOutput {
    pub status: CertificateStatus,
    pub authorization: Option<MintAuthorization>,
}

/// Claim Certificate Use Case
pub struct ClaimCertificateUseCase<L>
where
    L: ReplayLedger,
{
    ledger: Arc<L>,
    config: Arc<JudgeConfig>,
    issuer: IssueAuthorizationUseCase<L>,
}

impl<L> ClaimCertificateUseCase<L>
where
    L: ReplayLedger,
{
    pub fn new(ledger: Arc<L>, config: Arc<JudgeConfig>) -> Self {
        let issuer = IssueAuthorizationUseCase::new(ledger.clone(), config.clone());
        Self {
            ledger,
            config,
            issuer,
        }
    }

    pub async fn execute(&self, address: WalletAddress) -> JudgeResult<ClaimCertificateOutput> {
        let completions = self.ledger.completed_levels(&address).await?;
        let genuine: HashSet<u8> = completions
            .iter()
            .filter(|record| {
                record.kind == CompletionKind::Genuine
                    && (MIN_LEVEL..=MAX_LEVEL).contains(&record.level)
            })
            .map(|record| record.level)
            .collect();

        if genuine.len() < MAX_LEVEL as usize {
            tracing::debug!(user = %address, completed = genuine.len(), "Certificate not yet earned");
            return Ok(ClaimCertificateOutput {
                status: CertificateStatus::NotEligible {
                    completed: genuine.len(),
                },
                authorization: None,
            });
        }

        if self.config.signer.is_none() {
            return Err(JudgeError::SigningUnavailable);
        }

        let record = CompletionRecord::new(address, CERTIFICATE_LEVEL, CompletionKind::Genuine);
        if !self.ledger.record_completion(&record).await? {
            return Ok(ClaimCertificateOutput {
                status: CertificateStatus::AlreadyClaimed,
                authorization: None,
            });
        }

        let authorization = self.issuer.execute(address, CERTIFICATE_LEVEL).await?;
        tracing::info!(user = %address, "Certificate authorization issued");

        Ok(ClaimCertificateOutput {
            status: CertificateStatus::Claimed,
            authorization: Some(authorization),
        })
    }
}
