//! Warehouse domain: entity models and read-only repositories

pub mod models;
pub mod repository;

pub use models::{OrderStatus, StockByWarehouse, WarehouseOrder};
pub use repository::{OrderRepository, StockRepository};
