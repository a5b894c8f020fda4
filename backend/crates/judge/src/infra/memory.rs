//! In-Memory Replay Ledger
//!
//! Completions and consumed nonces for the process lifetime. The single
//! mutex guards only map operations and is never held across an await, so
//! the atomic check-and-insert semantics hold under concurrent submissions.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::CompletionRecord;
use crate::domain::repository::ReplayLedger;
use crate::domain::value_objects::{CompletionKind, Nonce, WalletAddress};
use crate::error::JudgeResult;

#[derive(Default)]
struct LedgerState {
    completions: HashMap<(WalletAddress, u8), CompletionRecord>,
    nonces: HashSet<Nonce>,
}

/// In-memory replay ledger
#[derive(Clone, Default)]
pub struct InMemoryReplayLedger {
    inner: Arc<Mutex<LedgerState>>,
}

impl InMemoryReplayLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reserved nonces (diagnostics)
    pub async fn nonce_count(&self) -> usize {
        self.inner.lock().await.nonces.len()
    }
}

impl ReplayLedger for InMemoryReplayLedger {
    async fn has_completed(&self, address: &WalletAddress, level: u8) -> JudgeResult<bool> {
        let state = self.inner.lock().await;
        Ok(state.completions.contains_key(&(*address, level)))
    }

    async fn record_completion(&self, record: &CompletionRecord) -> JudgeResult<bool> {
        let mut state = self.inner.lock().await;
        match state.completions.entry((record.address, record.level)) {
            Entry::Vacant(entry) => {
                entry.insert(record.clone());
                Ok(true)
            }
            Entry::Occupied(mut entry) => {
                // A demo completion yields to a later genuine one
                if entry.get().kind == CompletionKind::Demo
                    && record.kind == CompletionKind::Genuine
                {
                    entry.insert(record.clone());
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
        }
    }

    async fn completed_levels(&self, address: &WalletAddress) -> JudgeResult<Vec<CompletionRecord>> {
        let state = self.inner.lock().await;
        let mut records: Vec<CompletionRecord> = state
            .completions
            .values()
            .filter(|record| record.address == *address)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.level);
        Ok(records)
    }

    async fn nonce_used(&self, nonce: &Nonce) -> JudgeResult<bool> {
        let state = self.inner.lock().await;
        Ok(state.nonces.contains(nonce))
    }

    async fn record_nonce(&self, nonce: &Nonce) -> JudgeResult<bool> {
        let mut state = self.inner.lock().await;
        Ok(state.nonces.insert(*nonce))
    }
}
