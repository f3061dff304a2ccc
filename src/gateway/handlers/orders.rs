//! Warehouse order lookup handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use super::super::state::AppState;
use super::super::types::{ApiResponse, LookupError};
use crate::warehouse::{OrderRepository, WarehouseOrder};

/// List all warehouse orders
///
/// GET /warehouse-orders
#[utoipa::path(
    get,
    path = "/warehouse-orders",
    responses(
        (status = 200, description = "All warehouse orders", body = ApiResponse<Vec<WarehouseOrder>>),
        (status = 500, description = "Query failure")
    ),
    tag = "Warehouse Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<WarehouseOrder>>>, LookupError> {
    let orders = OrderRepository::list_all(state.db.pool())
        .await
        .map_err(|e| LookupError::query("warehouse orders", e))?;

    Ok(Json(ApiResponse::success(
        orders,
        "Warehouse orders retrieved successfully.",
    )))
}

/// Get a single warehouse order by ID
///
/// GET /warehouse-orders/{id}
#[utoipa::path(
    get,
    path = "/warehouse-orders/{id}",
    params(
        ("id" = i64, Path, description = "Warehouse order ID")
    ),
    responses(
        (status = 200, description = "Warehouse order", body = ApiResponse<WarehouseOrder>),
        (status = 404, description = "Warehouse order not found"),
        (status = 500, description = "Query failure")
    ),
    tag = "Warehouse Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<WarehouseOrder>>, LookupError> {
    match OrderRepository::get_by_id(state.db.pool(), id).await {
        Ok(Some(order)) => Ok(Json(ApiResponse::success(
            order,
            "Warehouse order retrieved successfully.",
        ))),
        Ok(None) => Err(LookupError::NotFound("Warehouse order")),
        Err(e) => Err(LookupError::query("warehouse order", e)),
    }
}
