//! Gateway types module
//!
//! - [`ApiResponse<T>`]: unified `{success, data, message}` envelope
//! - [`LookupError`]: typed NotFound / QueryFailure outcome

pub mod error;
pub mod response;

pub use error::LookupError;
pub use response::ApiResponse;
