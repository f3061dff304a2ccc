//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::warehouse::{OrderStatus, StockByWarehouse, WarehouseOrder};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse Read API",
        version = "1.0.0",
        description = "Read-only lookup endpoints over warehouse stock and order records.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::list_stocks,
        crate::gateway::handlers::get_stock,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::get_order,
    ),
    components(
        schemas(
            HealthResponse,
            StockByWarehouse,
            WarehouseOrder,
            OrderStatus,
        )
    ),
    tags(
        (name = "Stocks", description = "Stock-by-warehouse lookups"),
        (name = "Warehouse Orders", description = "Warehouse order lookups"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/stocks"));
        assert!(paths.contains_key("/stocks/{id}"));
        assert!(paths.contains_key("/warehouse-orders"));
        assert!(paths.contains_key("/warehouse-orders/{id}"));
    }
}
