//! Warehouse Read API
//!
//! A thin read-only REST gateway over two warehouse tables.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing / file-appender setup
//! - [`db`] - PostgreSQL connection pool
//! - [`warehouse`] - entity models and repositories
//! - [`gateway`] - axum router, handlers and response envelope

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod warehouse;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use warehouse::{
    OrderRepository, OrderStatus, StockByWarehouse, StockRepository, WarehouseOrder,
};
