//! Repository Traits
//!
//! Interface for the replay ledger: consumed nonces plus completed
//! (user, level) pairs. Implementation is in the infrastructure layer.
//! Both `record_*` operations are atomic check-and-insert; callers use the
//! returned flag to arbitrate races, never a separate has/insert pair.

use crate::domain::entities::CompletionRecord;
use crate::domain::value_objects::{Nonce, WalletAddress};
use crate::error::JudgeResult;

/// Replay ledger trait
#[trait_variant::make(ReplayLedger: Send)]
pub trait LocalReplayLedger {
    /// Whether a completion record exists for (address, level)
    async fn has_completed(&self, address: &WalletAddress, level: u8) -> JudgeResult<bool>;

    /// Insert a completion record atomically.
    ///
    /// Returns `true` when the record was newly inserted. A demo record is
    /// upgraded in place by a later genuine one (also `true`); any other
    /// duplicate returns `false` and leaves the existing record untouched.
    async fn record_completion(&self, record: &CompletionRecord) -> JudgeResult<bool>;

    /// All completion records for one address, in level order
    async fn completed_levels(&self, address: &WalletAddress) -> JudgeResult<Vec<CompletionRecord>>;

    /// Whether a nonce has already been reserved
    async fn nonce_used(&self, nonce: &Nonce) -> JudgeResult<bool>;

    /// Reserve a nonce atomically; `false` when it was already taken
    async fn record_nonce(&self, nonce: &Nonce) -> JudgeResult<bool>;
}
