//! API response envelope
//!
//! Every endpoint answers with the same wrapper:
//! - success: `{ "success": true, "data": ..., "message": "..." }`
//! - failure: `{ "success": false, "message": "..." }` (no `data` key)

use serde::Serialize;
use utoipa::ToSchema;

/// Unified API response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// true for success, false for any failure
    #[schema(example = true)]
    pub success: bool,
    /// Response data (only present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable outcome message
    #[schema(example = "Stocks retrieved successfully.")]
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }

    /// Create error response
    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success(vec![1, 2, 3], "Stocks retrieved successfully.");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(value["message"], "Stocks retrieved successfully.");
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let resp = ApiResponse::<()>::error("Stock not found.");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Stock not found.");
        assert!(
            value.as_object().unwrap().get("data").is_none(),
            "failure envelope must not carry a data key"
        );
    }

    #[test]
    fn test_success_with_empty_list_is_still_success() {
        let resp = ApiResponse::success(Vec::<i32>::new(), "Stocks retrieved successfully.");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([]));
    }
}
