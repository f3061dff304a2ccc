//! Health check handler

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::ApiResponse;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// Pings PostgreSQL at most once per interval; within the interval the
/// last ping result is reused, so a failed check keeps reporting 503
/// until a later ping succeeds. No internal details are exposed in the
/// response either way.
///
/// - Healthy: 200 OK + success envelope with {timestamp_ms}
/// - Unhealthy: 503 Service Unavailable + failure envelope
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    // Rate limit: only ping DB once per interval, cache the outcome
    static LAST_CHECK_MS: AtomicU64 = AtomicU64::new(0);
    static LAST_HEALTHY: AtomicBool = AtomicBool::new(false);
    const CHECK_INTERVAL_MS: u64 = 5000; // 5 seconds

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let last_check = LAST_CHECK_MS.load(Ordering::Relaxed);
    let healthy = if now_ms.saturating_sub(last_check) > CHECK_INTERVAL_MS {
        // Interval expired, do actual DB ping
        LAST_CHECK_MS.store(now_ms, Ordering::Relaxed);
        let ok = match state.db.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
                false
            }
        };
        LAST_HEALTHY.store(ok, Ordering::Relaxed);
        ok
    } else {
        // Within interval, reuse the last ping result
        LAST_HEALTHY.load(Ordering::Relaxed)
    };

    if healthy {
        (
            StatusCode::OK,
            Json(ApiResponse::success(
                HealthResponse {
                    timestamp_ms: now_ms,
                },
                "ok",
            )),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: None,
                message: "unavailable".to_string(),
            }),
        )
    }
}
