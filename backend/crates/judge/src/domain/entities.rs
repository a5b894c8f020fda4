//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::services::mint_message_hash;
use crate::domain::value_objects::{CompletionKind, Nonce, WalletAddress};

/// One user's completion of one level
///
/// At most one record exists per (address, level); records are never deleted
/// during normal operation.
#[derive(Debug, Clone)]
pub struct CompletionRecord {
    pub address: WalletAddress,
    pub level: u8,
    pub kind: CompletionKind,
    pub completed_at: DateTime<Utc>,
}

impl CompletionRecord {
    pub fn new(address: WalletAddress, level: u8, kind: CompletionKind) -> Self {
        Self {
            address,
            level,
            kind,
            completed_at: Utc::now(),
        }
    }
}

/// Signed, time-bounded, single-use voucher for an on-chain mint
///
/// Carries every field of the signed message so the caller (and transitively
/// the contract) can independently reconstruct and verify the hash.
#[derive(Debug, Clone)]
pub struct MintAuthorization {
    pub user: WalletAddress,
    pub level: u8,
    pub nonce: Nonce,
    /// Absolute unix deadline (seconds); checked again on-chain at mint time
    pub deadline: u64,
    pub contract: WalletAddress,
    pub signer: WalletAddress,
    /// 65-byte `r || s || v` recoverable signature
    pub signature: [u8; 65],
}

impl MintAuthorization {
    /// Recompute the Keccak-256 hash of the packed message fields
    pub fn message_hash(&self) -> [u8; 32] {
        mint_message_hash(
            &self.user,
            self.level,
            &self.nonce,
            self.deadline,
            &self.contract,
        )
    }
}
