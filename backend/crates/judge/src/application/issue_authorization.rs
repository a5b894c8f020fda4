//! Issue Authorization Use Case
//!
//! Builds and signs one mint authorization. The nonce is reserved in the
//! replay ledger before any signature leaves this function, so a crash
//! between signing and recording cannot double-spend a nonce from this
//! server's perspective.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::JudgeConfig;
use crate::domain::entities::MintAuthorization;
use crate::domain::repository::ReplayLedger;
use crate::domain::services::mint_message_hash;
use crate::domain::value_objects::{Nonce, WalletAddress};
use crate::error::{JudgeError, JudgeResult};

/// Issue Authorization Use Case
pub struct IssueAuthorizationUseCase<L>
where
    L: ReplayLedger,
{
    ledger: Arc<L>,
    config: Arc<JudgeConfig>,
}

impl<L> IssueAuthorizationUseCase<L>
where
    L: ReplayLedger,
{
    pub fn new(ledger: Arc<L>, config: Arc<JudgeConfig>) -> Self {
        Self { ledger, config }
    }

    pub async fn execute(&self, user: WalletAddress, level: u8) -> JudgeResult<MintAuthorization> {
        let signer = self
            .config
            .signer
            .as_ref()
            .ok_or(JudgeError::SigningUnavailable)?;

        // Atomic generate-and-reserve. A 256-bit collision is not expected
        // to happen; the loop makes uniqueness a ledger guarantee rather
        // than a probabilistic one.
        let nonce = loop {
            let candidate = Nonce::random();
            if self.ledger.record_nonce(&candidate).await? {
                break candidate;
            }
            tracing::warn!("Nonce collision, regenerating");
        };

        let deadline = Utc::now().timestamp() as u64 + self.config.validity_window.as_secs();

        let message_hash =
            mint_message_hash(&user, level, &nonce, deadline, &self.config.contract_address);
        let signature = signer.sign_personal(&message_hash)?;

        let authorization = MintAuthorization {
            user,
            level,
            nonce,
            deadline,
            contract: self.config.contract_address,
            signer: WalletAddress::from(signer.address()),
            signature,
        };

        tracing::info!(
            level,
            user = %authorization.user,
            nonce = %authorization.nonce,
            deadline,
            "Mint authorization issued"
        );

        Ok(authorization)
    }
}
