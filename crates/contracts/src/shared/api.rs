//! Envelope types every endpoint shares

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ErrorResponse {
    /// Most specific human-readable text in the body
    pub fn best_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.trim().is_empty()))
    }
}

/// `GET /{id}/usage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    pub usage_count: i64,
}

impl UsageResponse {
    pub fn can_delete(&self) -> bool {
        self.usage_count <= 0
    }
}

/// `PATCH /{id}/status` body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub is_active: bool,
}

pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_message_prefers_message_over_error() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"status":409,"error":"Conflict","message":"Farm type is in use","path":"/api/x"}"#,
        )
        .unwrap();
        assert_eq!(body.best_message(), Some("Farm type is in use"));

        let blank = ErrorResponse {
            message: Some(" ".into()),
            error: Some("Bad Request".into()),
            ..Default::default()
        };
        assert_eq!(blank.best_message(), Some("Bad Request"));
    }

    #[test]
    fn usage_gates_deletion() {
        assert!(UsageResponse { usage_count: 0 }.can_delete());
        assert!(!UsageResponse { usage_count: 2 }.can_delete());
    }

    #[test]
    fn status_body_shape() {
        let json = serde_json::to_string(&StatusUpdateRequest { is_active: false }).unwrap();
        assert_eq!(json, r#"{"isActive":false}"#);
    }
}
