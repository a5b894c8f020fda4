//! Application Configuration

use std::time::Duration;

use platform::signer::EthSigner;

use crate::domain::value_objects::WalletAddress;

/// Judge application configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Server-held signing key. `None` means issuance fails closed with a
    /// service error; verdicts are unaffected.
    pub signer: Option<EthSigner>,
    /// Target NFT contract bound into every signed message
    pub contract_address: WalletAddress,
    /// Authorization validity window (deadline = now + window)
    pub validity_window: Duration,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            signer: None,
            contract_address: WalletAddress::ZERO,
            validity_window: Duration::from_secs(3600),
        }
    }
}

impl JudgeConfig {
    /// Config with a throwaway random signer (for development and tests)
    pub fn development() -> Self {
        Self {
            signer: Some(EthSigner::random()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validity_is_one_hour() {
        let config = JudgeConfig::default();
        assert_eq!(config.validity_window, Duration::from_secs(3600));
        assert!(config.signer.is_none());
        assert_eq!(config.contract_address, WalletAddress::ZERO);
    }

    #[test]
    fn test_development_has_signer() {
        assert!(JudgeConfig::development().signer.is_some());
    }
}
