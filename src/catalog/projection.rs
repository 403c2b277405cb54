//! # Response Projections
//!
//! The JSON-safe shapes the API copies product records into. Optional
//! text fields coalesce to empty strings; a missing image projects as a
//! null URL rather than an absent key.

use serde::Serialize;

use super::model::{Category, Product, ProductType, Uom};

/// Image field name served at `/image/product/{id}/{field}` for rows
pub const IMAGE_THUMB: &str = "image_thumb";

/// Image field name served at `/image/product/{id}/{field}` for details
pub const IMAGE_FULL: &str = "image_full";

/// Compact row used by the plain product listing
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub reference: String,
    pub barcode: String,
    pub price: f64,
    pub quantity: f64,
    pub image_url: Option<String>,
}

impl ProductSummary {
    pub(crate) fn project(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            reference: product.reference.clone().unwrap_or_default(),
            barcode: product.barcode.clone().unwrap_or_default(),
            price: product.list_price,
            quantity: product.quantity_on_hand,
            image_url: image_url(product, IMAGE_THUMB),
        }
    }
}

/// Row used by search results and category listings
#[derive(Debug, Clone, Serialize)]
pub struct ProductHit {
    pub id: i64,
    pub name: String,
    pub reference: String,
    pub barcode: String,
    pub price: f64,
    pub quantity: f64,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub category: String,
    pub image_url: Option<String>,
}

impl ProductHit {
    pub(crate) fn project(product: &Product, category_name: &str) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            reference: product.reference.clone().unwrap_or_default(),
            barcode: product.barcode.clone().unwrap_or_default(),
            price: product.list_price,
            quantity: product.quantity_on_hand,
            product_type: product.product_type,
            category: category_name.to_string(),
            image_url: image_url(product, IMAGE_THUMB),
        }
    }
}

/// Reference to a related record, with the fallback label used when the
/// relation is unset
#[derive(Debug, Clone, Serialize)]
pub struct RecordRef {
    pub id: Option<i64>,
    pub name: String,
}

/// Full field-by-field projection of one product
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub reference: String,
    pub barcode: String,
    pub list_price: f64,
    pub cost_price: f64,
    pub quantity_on_hand: f64,
    pub quantity_forecasted: f64,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub category: RecordRef,
    pub uom: RecordRef,
    pub image_url: Option<String>,
    pub active: bool,
    pub description: String,
    pub description_sale: String,
}

impl ProductDetail {
    pub(crate) fn project(
        product: &Product,
        category: Option<&Category>,
        uom: Option<&Uom>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            reference: product.reference.clone().unwrap_or_default(),
            barcode: product.barcode.clone().unwrap_or_default(),
            list_price: product.list_price,
            cost_price: product.cost_price,
            quantity_on_hand: product.quantity_on_hand,
            quantity_forecasted: product.quantity_forecasted,
            product_type: product.product_type,
            category: RecordRef {
                id: category.map(|c| c.id),
                name: category.map_or_else(|| "All".to_string(), |c| c.name.clone()),
            },
            uom: RecordRef {
                id: uom.map(|u| u.id),
                name: uom.map_or_else(|| "Units".to_string(), |u| u.name.clone()),
            },
            image_url: image_url(product, IMAGE_FULL),
            active: product.active,
            description: product.description.clone().unwrap_or_default(),
            description_sale: product.description_sale.clone().unwrap_or_default(),
        }
    }
}

/// Image-serving URL per the `/image/{type}/{id}/{field}` convention,
/// or None when the record carries no image blob
fn image_url(product: &Product, field: &str) -> Option<String> {
    product
        .image
        .as_ref()
        .map(|_| format!("/image/product/{}/{}", product.id, field))
}
