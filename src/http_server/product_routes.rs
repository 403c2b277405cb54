//! Product HTTP Routes
//!
//! The public, read-only product API: health check, listing, detail,
//! search, and category lookup. All routes are GET, unauthenticated,
//! and answer with JSON.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::catalog::{ProductCatalog, ProductDetail, ProductFilters, ProductHit, ProductSummary};

use super::errors::{ApiError, ApiResult};

/// Default page size for the plain listing
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Default page size for search
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductSummary>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub products: Vec<ProductHit>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: String,
    pub products: Vec<ProductHit>,
    pub count: usize,
}

// ==================
// Routes
// ==================

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Create the product API routes
pub fn product_routes(catalog: Arc<ProductCatalog>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products/search", get(search_products_handler))
        .route("/products/category/{name}", get(products_by_category_handler))
        .route("/products/{id}", get(get_product_handler))
        .with_state(catalog)
}

// ==================
// Handlers
// ==================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "product catalog API is running".to_string(),
    })
}

async fn list_products_handler(
    State(catalog): State<Arc<ProductCatalog>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ProductListResponse>> {
    let limit = parse_usize_param(&params, "limit", DEFAULT_LIST_LIMIT)?;
    let offset = parse_usize_param(&params, "offset", 0)?;

    let products = catalog.list_products(limit, offset)?;
    let total = products.len();

    Ok(Json(ProductListResponse {
        products,
        total,
        limit,
        offset,
    }))
}

async fn get_product_handler(
    State(catalog): State<Arc<ProductCatalog>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProductDetail>> {
    let detail = catalog.product_detail(id)?;
    Ok(Json(detail))
}

async fn search_products_handler(
    State(catalog): State<Arc<ProductCatalog>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<SearchResponse>> {
    let filters = ProductFilters {
        name: non_empty_param(&params, "name"),
        reference: non_empty_param(&params, "reference"),
        barcode: non_empty_param(&params, "barcode"),
        category: non_empty_param(&params, "category"),
        product_type: non_empty_param(&params, "type"),
        min_price: parse_f64_param(&params, "min_price")?,
        max_price: parse_f64_param(&params, "max_price")?,
    };
    let limit = parse_usize_param(&params, "limit", DEFAULT_SEARCH_LIMIT)?;
    let offset = parse_usize_param(&params, "offset", 0)?;

    let page = catalog.search_products(&filters, limit, offset)?;

    Ok(Json(SearchResponse {
        products: page.products,
        total: page.total,
        limit,
        offset,
    }))
}

async fn products_by_category_handler(
    State(catalog): State<Arc<ProductCatalog>>,
    Path(name): Path<String>,
) -> ApiResult<Json<CategoryResponse>> {
    let result = catalog.products_by_category(&name)?;

    // The envelope echoes the requested name; rows carry the resolved one
    Ok(Json(CategoryResponse {
        category: name,
        count: result.products.len(),
        products: result.products,
    }))
}

// ==================
// Parameter Parsing
// ==================

/// A filter parameter; empty strings count as absent
fn non_empty_param(params: &HashMap<String, String>, name: &str) -> Option<String> {
    params.get(name).filter(|v| !v.is_empty()).cloned()
}

fn parse_usize_param(
    params: &HashMap<String, String>,
    name: &str,
    default: usize,
) -> ApiResult<usize> {
    match params.get(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ApiError::InvalidQueryParam {
            name: name.to_string(),
            value: raw.clone(),
        }),
    }
}

fn parse_f64_param(params: &HashMap<String, String>, name: &str) -> ApiResult<Option<f64>> {
    match params.get(name).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidQueryParam {
                name: name.to_string(),
                value: raw.clone(),
            }),
    }
}
