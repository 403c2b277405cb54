//! Demo fixtures for the product catalog.
//!
//! Loaded at startup when the config enables `seed_demo`, so a fresh
//! server answers queries with something other than empty lists.

use super::errors::CatalogResult;
use super::facade::ProductCatalog;
use super::model::{Product, ProductType};

// Stand-in blob; only presence matters to the API
const DEMO_IMAGE: &[u8] = &[0x89, 0x50, 0x4e, 0x47];

/// Populate the catalog with demo categories, units and products
pub fn seed_demo(catalog: &ProductCatalog) -> CatalogResult<()> {
    let furniture = catalog.insert_category("Furniture")?;
    let clothing = catalog.insert_category("Clothing")?;
    let services = catalog.insert_category("Services")?;

    let units = catalog.insert_uom("Units")?;
    let hours = catalog.insert_uom("Hours")?;

    let mut desk = Product::named("Office Desk");
    desk.reference = Some("DESK-001".to_string());
    desk.barcode = Some("5400000000017".to_string());
    desk.list_price = 249.0;
    desk.cost_price = 180.0;
    desk.quantity_on_hand = 12.0;
    desk.quantity_forecasted = 20.0;
    desk.category_id = Some(furniture);
    desk.uom_id = Some(units);
    desk.image = Some(DEMO_IMAGE.to_vec());
    desk.description = Some("Adjustable office desk".to_string());
    desk.description_sale = Some("160x80cm desk with height adjustment".to_string());
    catalog.insert_product(desk)?;

    let mut chair = Product::named("Office Chair");
    chair.reference = Some("CHAIR-001".to_string());
    chair.barcode = Some("5400000000024".to_string());
    chair.list_price = 99.5;
    chair.cost_price = 60.0;
    chair.quantity_on_hand = 30.0;
    chair.quantity_forecasted = 30.0;
    chair.category_id = Some(furniture);
    chair.uom_id = Some(units);
    catalog.insert_product(chair)?;

    let mut shirt = Product::named("Blue T-Shirt");
    shirt.reference = Some("SHIRT-BLU".to_string());
    shirt.barcode = Some("5400000000031".to_string());
    shirt.list_price = 19.9;
    shirt.cost_price = 7.5;
    shirt.quantity_on_hand = 140.0;
    shirt.quantity_forecasted = 120.0;
    shirt.product_type = ProductType::Consumable;
    shirt.category_id = Some(clothing);
    shirt.uom_id = Some(units);
    shirt.image = Some(DEMO_IMAGE.to_vec());
    catalog.insert_product(shirt)?;

    let mut consulting = Product::named("Consulting Hour");
    consulting.reference = Some("SRV-CONS".to_string());
    consulting.list_price = 120.0;
    consulting.cost_price = 80.0;
    consulting.product_type = ProductType::Service;
    consulting.category_id = Some(services);
    consulting.uom_id = Some(hours);
    consulting.description_sale = Some("Billed per started hour".to_string());
    catalog.insert_product(consulting)?;

    // Archived record: resolvable by id, hidden from listings
    let mut legacy = Product::named("Legacy Lamp");
    legacy.reference = Some("LAMP-OLD".to_string());
    legacy.list_price = 35.0;
    legacy.category_id = Some(furniture);
    legacy.uom_id = Some(units);
    legacy.active = false;
    catalog.insert_product(legacy)?;

    Ok(())
}
