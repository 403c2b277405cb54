//! # HTTP Server
//!
//! Main HTTP server combining the public product router and the admin
//! record router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::ProductCatalog;
use crate::library::LibraryService;

use super::config::HttpServerConfig;
use super::library_routes::library_routes;
use super::product_routes::{health_routes, product_routes};

/// HTTP server for the catalog and admin APIs
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given catalog and library
    pub fn new(
        config: HttpServerConfig,
        catalog: Arc<ProductCatalog>,
        library: Arc<LibraryService>,
    ) -> Self {
        let router = Self::build_router(&config, catalog, library);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        catalog: Arc<ProductCatalog>,
        library: Arc<LibraryService>,
    ) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Public product API at root level
            .merge(product_routes(catalog))
            // Record management under /admin
            .nest("/admin", library_routes(library))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", e),
            )
        })?;

        println!("Starting catalogd HTTP server on {}", addr);
        println!("Health check: http://{}/health", addr);
        println!("API endpoints:");
        println!("  - /products - product listing");
        println!("  - /products/{{id}} - product detail");
        println!("  - /products/search - filtered search");
        println!("  - /products/category/{{name}} - products by category");
        println!("  - /admin/authors, /admin/books - record management");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
