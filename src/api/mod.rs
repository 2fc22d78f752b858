//! # HTTP API Module
//!
//! Axum endpoints for grid queries and expense mutations.

pub mod errors;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use response::{DeleteResponse, InsertResponse, QueryResponse};
pub use server::{ApiServer, AppState};
