//! Level Registry - the game's secret table
//!
//! Immutable configuration for every difficulty level: the canonical secret,
//! the guardian persona, guard policies, blacklist terms, hints and NFT
//! metadata. Built once at startup and shared read-only across all sessions;
//! there is no mutable level state anywhere at runtime.

pub mod config;
pub mod registry;
mod table;

pub use config::{Difficulty, GuardPolicy, LevelConfig, NftMetadata, Tier};
pub use registry::{CERTIFICATE_LEVEL, InvalidLevel, LevelRegistry, MAX_LEVEL, MIN_LEVEL};
