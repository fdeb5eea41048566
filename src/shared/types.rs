use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for all API responses.
///
/// Successful responses carry `data`; failures carry a stable `error`
/// message and no data. Fields that are `None` are omitted from the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(serde_json::json!({"id": "abc"}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["id"], "abc");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_has_stable_error_field() {
        let response = ApiResponse::<()>::error("File not found".to_string());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "File not found");
        assert!(value.get("data").is_none());
    }
}
