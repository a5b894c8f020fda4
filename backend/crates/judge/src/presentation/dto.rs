//! API DTOs (Data Transfer Objects)

use levels::NftMetadata;
use serde::{Deserialize, Serialize};

use crate::domain::entities::MintAuthorization;

/// Request for POST /api/judge/submit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub level: u8,
    pub password: String,
    pub wallet_address: String,
}

/// Response for POST /api/judge/submit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub correct: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_authorization: Option<MintAuthorizationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nft_metadata: Option<NftMetadata>,
}

/// Request for POST /api/judge/certificate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    pub wallet_address: String,
}

/// Response for POST /api/judge/certificate
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateResponse {
    pub eligible: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_authorization: Option<MintAuthorizationDto>,
}

/// Wire form of a signed mint authorization
///
/// `message_fields` restates every signed field so the caller can
/// independently reconstruct the hash the contract will verify.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintAuthorizationDto {
    /// 65-byte signature, 0x-hex
    pub signature: String,
    /// 32-byte nonce, 0x-hex
    pub nonce: String,
    /// Absolute unix deadline (seconds)
    pub deadline: u64,
    /// EIP-55 address of the authorized signer
    pub signer: String,
    pub message_fields: MessageFieldsDto,
}

/// The exact fields bound into the signed message, in signed order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFieldsDto {
    pub user_address: String,
    pub level: u8,
    pub nonce: String,
    pub deadline: u64,
    pub contract_address: String,
}

impl From<&MintAuthorization> for MintAuthorizationDto {
    fn from(authorization: &MintAuthorization) -> Self {
        Self {
            signature: format!("0x{}", hex::encode(authorization.signature)),
            nonce: authorization.nonce.to_hex(),
            deadline: authorization.deadline,
            signer: authorization.signer.to_string(),
            message_fields: MessageFieldsDto {
                user_address: authorization.user.to_string(),
                level: authorization.level,
                nonce: authorization.nonce.to_hex(),
                deadline: authorization.deadline,
                contract_address: authorization.contract.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Nonce, WalletAddress};

    #[test]
    fn test_submit_request_deserialization() {
        let json = r#"{"level":3,"password":"STARFALL","walletAddress":"0x00000000000000000000000000000000000000aa"}"#;
        let request: SubmitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.level, 3);
        assert_eq!(request.password, "STARFALL");
    }

    #[test]
    fn test_authorization_dto_wire_shape() {
        let authorization = MintAuthorization {
            user: WalletAddress::from([0xaa; 20]),
            level: 4,
            nonce: Nonce::from_bytes([0x11; 32]),
            deadline: 1_700_000_000,
            contract: WalletAddress::from([0xbb; 20]),
            signer: WalletAddress::from([0xcc; 20]),
            signature: [0x22; 65],
        };

        let dto = MintAuthorizationDto::from(&authorization);
        assert_eq!(dto.signature.len(), 2 + 130);
        assert_eq!(dto.nonce, format!("0x{}", "11".repeat(32)));
        assert_eq!(dto.message_fields.level, 4);
        assert_eq!(dto.message_fields.deadline, dto.deadline);

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("messageFields"));
        assert!(json.contains("userAddress"));
        assert!(json.contains("contractAddress"));
    }

    #[test]
    fn test_submit_response_omits_absent_authorization() {
        let response = SubmitResponse {
            correct: false,
            message: "Incorrect password. Try again!".to_string(),
            mint_authorization: None,
            nft_metadata: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("mintAuthorization"));
        assert!(!json.contains("nftMetadata"));
    }
}
