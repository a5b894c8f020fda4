//! Guardian - Guarded LLM Conversation Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, guard decision logic, repository traits
//! - `application/` - Use cases (chat turn, session clearing) and config
//! - `infra/` - In-memory session store
//! - `presentation/` - HTTP handlers
//!
//! ## Security Model
//! - Every level's disclosure policy is evaluated on both the inbound player
//!   message and the candidate model reply
//! - The literal secret is scanned for in every outbound reply regardless of
//!   the configured policy (hard backstop)
//! - Classifier outages resolve per direction: fail-open inbound,
//!   fail-closed outbound
//! - Session identifiers are server-generated; client-supplied unknown ids
//!   are never adopted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::chat::{ChatOutput, ChatUseCase};
pub use application::config::GuardianConfig;
pub use error::{GuardianError, GuardianResult};
pub use infra::memory::InMemorySessionStore;
pub use presentation::router::guardian_router;

#[cfg(test)]
mod tests;
