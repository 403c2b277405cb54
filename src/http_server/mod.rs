//! # HTTP Server Module
//!
//! Axum routers for the public product API and the admin record surface,
//! plus server configuration and the shared error envelope.

pub mod config;
pub mod errors;
pub mod library_routes;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorBody};
pub use server::HttpServer;
