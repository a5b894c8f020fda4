//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (Keccak-256, SHA-256, random bytes)
//! - Ethereum-compatible recoverable signing (secp256k1, EIP-191)
//! - Chat-model client for OpenAI-compatible LLM providers

pub mod crypto;
pub mod llm;
pub mod signer;
