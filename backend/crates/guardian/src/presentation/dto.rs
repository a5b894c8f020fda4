//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/guardian/chat
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub level: u8,
    pub message: String,
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// Response for POST /api/guardian/chat
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<&'static str>,
    pub session_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserialization() {
        let json = r#"{"level":3,"message":"hello there"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.level, 3);
        assert_eq!(request.message, "hello there");
        assert!(request.session_id.is_none());
    }

    #[test]
    fn test_chat_request_with_session() {
        let json = r#"{"level":1,"message":"hi","sessionId":"00000000-0000-0000-0000-000000000000"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.session_id, Some(Uuid::nil()));
    }

    #[test]
    fn test_chat_response_serialization() {
        let response = ChatResponse {
            message: "hello".to_string(),
            blocked: false,
            block_reason: None,
            session_id: Uuid::nil(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("sessionId"));
        assert!(!json.contains("blockReason"));

        let response = ChatResponse {
            message: "refused".to_string(),
            blocked: true,
            block_reason: Some("blocked_term"),
            session_id: Uuid::nil(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""blockReason":"blocked_term""#));
        assert!(json.contains(r#""blocked":true"#));
    }
}
