//! Error types for the product catalog.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Product catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested product id does not resolve to an existing record
    #[error("product {0} not found")]
    ProductNotFound(i64),

    /// A product references a category that does not exist
    #[error("category {0} does not exist")]
    UnknownCategory(i64),

    /// A product references a unit of measure that does not exist
    #[error("unit of measure {0} does not exist")]
    UnknownUom(i64),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
