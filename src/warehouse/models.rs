//! Data models for warehouse stock and order records

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A stock level for one SKU in one warehouse
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct StockByWarehouse {
    /// Record ID (primary key)
    #[schema(example = 1)]
    pub id: i64,
    /// Warehouse code
    #[schema(example = "A")]
    pub warehouse: String,
    /// Stock keeping unit
    #[schema(example = "SKU-1042")]
    pub sku: String,
    /// Units on hand
    #[schema(example = 10)]
    pub qty: i32,
    /// Last stock movement
    pub updated_at: DateTime<Utc>,
}

/// Warehouse order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum OrderStatus {
    Open = 0,
    Picking = 1,
    Shipped = 2,
    Cancelled = 3,
}

impl From<i16> for OrderStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => OrderStatus::Picking,
            2 => OrderStatus::Shipped,
            3 => OrderStatus::Cancelled,
            _ => OrderStatus::Open,
        }
    }
}

/// An order routed to a warehouse
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WarehouseOrder {
    /// Record ID (primary key)
    #[schema(example = 7)]
    pub id: i64,
    /// External order number
    #[schema(example = "WO-2024-0007")]
    pub order_no: String,
    /// Warehouse code the order is assigned to
    #[schema(example = "A")]
    pub warehouse: String,
    /// Fulfillment status
    pub status: OrderStatus,
    /// Order creation time
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_from_i16() {
        assert_eq!(OrderStatus::from(0), OrderStatus::Open);
        assert_eq!(OrderStatus::from(1), OrderStatus::Picking);
        assert_eq!(OrderStatus::from(2), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from(3), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from(99), OrderStatus::Open); // unknown maps to Open
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
    }

    #[test]
    fn test_stock_serializes_all_fields() {
        let stock = StockByWarehouse {
            id: 1,
            warehouse: "A".to_string(),
            sku: "SKU-1042".to_string(),
            qty: 10,
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&stock).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["warehouse"], "A");
        assert_eq!(value["qty"], 10);
    }
}
