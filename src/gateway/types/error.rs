//! Typed lookup errors
//!
//! Handlers distinguish an absent row (expected, user-facing) from an
//! underlying query failure. Both render as the standard failure envelope;
//! the query error text is forwarded into the body unchanged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::response::ApiResponse;

/// Failure outcome of a lookup endpoint
#[derive(Debug, Error)]
pub enum LookupError {
    /// No row for the requested ID, e.g. "Stock not found."
    #[error("{0} not found.")]
    NotFound(&'static str),
    /// The underlying query failed, e.g. "Error retrieving stocks: <detail>"
    #[error("Error retrieving {what}: {source}")]
    Query {
        what: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl LookupError {
    pub fn query(what: &'static str, source: sqlx::Error) -> Self {
        Self::Query { what, source }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::Query { what, source } => {
                tracing::error!("Query failed retrieving {}: {}", what, source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            LookupError::NotFound("Stock").to_string(),
            "Stock not found."
        );
        assert_eq!(
            LookupError::NotFound("Warehouse order").to_string(),
            "Warehouse order not found."
        );
    }

    #[test]
    fn test_query_message_forwards_detail() {
        let err = LookupError::query("stocks", sqlx::Error::PoolTimedOut);
        let msg = err.to_string();
        assert!(
            msg.starts_with("Error retrieving stocks: "),
            "unexpected message: {msg}"
        );
    }

    #[tokio::test]
    async fn test_not_found_response_body() {
        let response = LookupError::NotFound("Warehouse order").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Warehouse order not found.");
    }

    #[tokio::test]
    async fn test_query_failure_response_body() {
        let response =
            LookupError::query("warehouse orders", sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["success"], false);
        let msg = value["message"].as_str().unwrap();
        assert!(msg.starts_with("Error retrieving warehouse orders: "));
    }
}
