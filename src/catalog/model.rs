//! Product catalog record types
//!
//! The explicit schema for the records this system reads. Products carry
//! the full field set of the external product store; the HTTP layer only
//! ever sees projections of them.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Product type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Stocked goods with on-hand quantity tracking
    Storable,
    /// Consumables without stock tracking
    Consumable,
    /// Services
    Service,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Storable => "storable",
            ProductType::Consumable => "consumable",
            ProductType::Service => "service",
        }
    }
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Record for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Unit of measure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Uom {
    pub id: i64,
    pub name: String,
}

impl Record for Uom {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// A product record
///
/// This system never creates, mutates, or deletes products over HTTP;
/// rows enter the table through fixtures and seeding only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Internal reference code
    pub reference: Option<String>,
    pub barcode: Option<String>,
    pub list_price: f64,
    pub cost_price: f64,
    pub quantity_on_hand: f64,
    pub quantity_forecasted: f64,
    pub product_type: ProductType,
    pub category_id: Option<i64>,
    pub uom_id: Option<i64>,
    /// Raw image blob; only its presence is exposed, as an image URL
    pub image: Option<Vec<u8>>,
    pub active: bool,
    pub description: Option<String>,
    pub description_sale: Option<String>,
}

impl Product {
    /// Minimal active product with the given name; remaining fields default
    pub fn named(name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            reference: None,
            barcode: None,
            list_price: 0.0,
            cost_price: 0.0,
            quantity_on_hand: 0.0,
            quantity_forecasted: 0.0,
            product_type: ProductType::Storable,
            category_id: None,
            uom_id: None,
            image: None,
            active: true,
            description: None,
            description_sale: None,
        }
    }
}

impl Record for Product {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}
