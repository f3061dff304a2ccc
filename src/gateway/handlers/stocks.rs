//! Stock lookup handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use super::super::state::AppState;
use super::super::types::{ApiResponse, LookupError};
use crate::warehouse::{StockByWarehouse, StockRepository};

/// List all stock-by-warehouse records
///
/// GET /stocks
#[utoipa::path(
    get,
    path = "/stocks",
    responses(
        (status = 200, description = "All stock records", body = ApiResponse<Vec<StockByWarehouse>>),
        (status = 500, description = "Query failure")
    ),
    tag = "Stocks"
)]
pub async fn list_stocks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<StockByWarehouse>>>, LookupError> {
    let stocks = StockRepository::list_all(state.db.pool())
        .await
        .map_err(|e| LookupError::query("stocks", e))?;

    Ok(Json(ApiResponse::success(
        stocks,
        "Stocks retrieved successfully.",
    )))
}

/// Get a single stock record by ID
///
/// GET /stocks/{id}
#[utoipa::path(
    get,
    path = "/stocks/{id}",
    params(
        ("id" = i64, Path, description = "Stock record ID")
    ),
    responses(
        (status = 200, description = "Stock record", body = ApiResponse<StockByWarehouse>),
        (status = 404, description = "Stock not found"),
        (status = 500, description = "Query failure")
    ),
    tag = "Stocks"
)]
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<StockByWarehouse>>, LookupError> {
    match StockRepository::get_by_id(state.db.pool(), id).await {
        Ok(Some(stock)) => Ok(Json(ApiResponse::success(
            stock,
            "Stock retrieved successfully.",
        ))),
        Ok(None) => Err(LookupError::NotFound("Stock")),
        Err(e) => Err(LookupError::query("stock", e)),
    }
}
