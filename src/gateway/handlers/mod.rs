//! HTTP request handlers

pub mod health;
pub mod orders;
pub mod stocks;

// Glob re-exports: OpenAPI registration needs the generated path items
// alongside the handlers themselves
pub use health::*;
pub use orders::*;
pub use stocks::*;
