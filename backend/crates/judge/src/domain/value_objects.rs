//! Domain Value Objects

use std::fmt;
use std::str::FromStr;

use platform::crypto::{eip55_checksum, random_bytes32};
use thiserror::Error;

/// Malformed wallet address input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("address must be a 0x-prefixed 40-digit hex string")]
pub struct AddressParseError;

/// 20-byte Ethereum wallet address
///
/// Parsed case-insensitively; displayed with the EIP-55 mixed-case checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletAddress([u8; 20]);

impl WalletAddress {
    pub const ZERO: WalletAddress = WalletAddress([0u8; 20]);

    pub fn parse(s: &str) -> Result<Self, AddressParseError> {
        let stripped = s.trim().strip_prefix("0x").ok_or(AddressParseError)?;
        if stripped.len() != 40 {
            return Err(AddressParseError);
        }
        let bytes = hex::decode(stripped).map_err(|_| AddressParseError)?;
        let mut address = [0u8; 20];
        address.copy_from_slice(&bytes);
        Ok(Self(address))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// EIP-55 checksummed string form
    pub fn checksum(&self) -> String {
        eip55_checksum(&self.0)
    }
}

impl From<[u8; 20]> for WalletAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.checksum())
    }
}

impl FromStr for WalletAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 256-bit single-use value embedded in every signed authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; 32]);

impl Nonce {
    /// Fresh random nonce from the OS RNG
    pub fn random() -> Self {
        Self(random_bytes32())
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Whether a completion came from the real secret or the master override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// The level's actual secret was submitted
    Genuine,
    /// The master-override sentinel was used; no on-chain reward
    Demo,
}

/// How a correct submission matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Exact match against the level's secret
    Secret,
    /// The master-override sentinel
    MasterOverride,
}

/// Result of judging one guess; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub level: u8,
    pub correct: bool,
    pub normalized: String,
    pub via: Option<MatchKind>,
}

impl Verdict {
    pub fn is_master_override(&self) -> bool {
        self.via == Some(MatchKind::MasterOverride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_any_case() {
        let lower = WalletAddress::parse("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let mixed = WalletAddress::parse("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_display_is_checksummed() {
        let address = WalletAddress::parse("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(
            address.to_string(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(WalletAddress::parse("").is_err());
        assert!(WalletAddress::parse("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_err());
        assert!(WalletAddress::parse("0x1234").is_err());
        assert!(WalletAddress::parse("0xzzzeb6053f3e94c9b9a09f33669435e7ef1beaed").is_err());
    }

    #[test]
    fn test_nonce_randomness_and_hex() {
        let a = Nonce::random();
        let b = Nonce::random();
        assert_ne!(a, b);
        assert_eq!(a.to_hex().len(), 2 + 64);
        assert!(a.to_hex().starts_with("0x"));
    }
}
