//! Judge - Verification and Reward-Issuance Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, verdict/signing logic, replay-ledger trait
//! - `application/` - Use cases (guess submission, certificate claim)
//! - `infra/` - In-memory replay ledger
//! - `presentation/` - HTTP handlers
//!
//! ## Security Model
//! - The backend is the sole authority for verdicts, nonces, deadlines and
//!   signatures; nothing client-supplied is trusted beyond the guess itself
//! - Completion recording is atomic (one authorization per user per level)
//! - Nonces are reserved in the ledger before the signature is returned
//! - The signed message binds user + level + nonce + deadline + contract,
//!   byte-for-byte what the on-chain verifier recomputes

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::JudgeConfig;
pub use application::submit_guess::{SubmitGuessOutput, SubmitGuessUseCase, SubmitStatus};
pub use domain::value_objects::WalletAddress;
pub use error::{JudgeError, JudgeResult};
pub use infra::memory::InMemoryReplayLedger;
pub use presentation::router::judge_router;
