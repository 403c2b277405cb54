//! # Product Query Facade
//!
//! Read-only query operations over the product tables. Each operation
//! builds a condition list, hands it to the store's query executor, and
//! projects the matched rows.
//!
//! Queries never return archived products; `get` resolves any id so an
//! archived record can still be inspected in full.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{json, Value};

use crate::store::{Condition, StoreError, Table};

use super::errors::{CatalogError, CatalogResult};
use super::model::{Category, Product, Uom};
use super::projection::{ProductDetail, ProductHit, ProductSummary};

/// Filters accepted by product search. All supplied filters are ANDed.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Case-insensitive substring match on the product name
    pub name: Option<String>,
    /// Exact match on the internal reference code
    pub reference: Option<String>,
    /// Exact match on the barcode
    pub barcode: Option<String>,
    /// Case-insensitive substring match against category names
    pub category: Option<String>,
    /// Inclusive lower bound on the list price
    pub min_price: Option<f64>,
    /// Inclusive upper bound on the list price
    pub max_price: Option<f64>,
    /// Exact match on the product type tag
    pub product_type: Option<String>,
}

/// One page of search results plus the unpaginated match count
#[derive(Debug)]
pub struct SearchPage {
    pub products: Vec<ProductHit>,
    pub total: usize,
}

/// Result of a category lookup: the resolved category name (None when no
/// category matched) and every product in it
#[derive(Debug)]
pub struct CategoryProducts {
    pub category: Option<String>,
    pub products: Vec<ProductHit>,
}

struct CatalogTables {
    products: Table<Product>,
    categories: Table<Category>,
    uoms: Table<Uom>,
}

/// The product catalog: product, category and unit-of-measure tables
/// behind a read/write lock
pub struct ProductCatalog {
    inner: RwLock<CatalogTables>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogTables {
                products: Table::new(),
                categories: Table::new(),
                uoms: Table::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogTables>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogTables>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    // ==================
    // Fixture / ingest surface (not exposed over HTTP)
    // ==================

    pub fn insert_category(&self, name: &str) -> CatalogResult<i64> {
        let mut tables = self.write()?;
        Ok(tables.categories.insert(Category {
            id: 0,
            name: name.to_string(),
        }))
    }

    pub fn insert_uom(&self, name: &str) -> CatalogResult<i64> {
        let mut tables = self.write()?;
        Ok(tables.uoms.insert(Uom {
            id: 0,
            name: name.to_string(),
        }))
    }

    /// Insert a product after checking its relations resolve
    pub fn insert_product(&self, product: Product) -> CatalogResult<i64> {
        let mut tables = self.write()?;

        if let Some(category_id) = product.category_id {
            if tables.categories.get(category_id).is_none() {
                return Err(CatalogError::UnknownCategory(category_id));
            }
        }
        if let Some(uom_id) = product.uom_id {
            if tables.uoms.get(uom_id).is_none() {
                return Err(CatalogError::UnknownUom(uom_id));
            }
        }

        Ok(tables.products.insert(product))
    }

    // ==================
    // Read operations
    // ==================

    /// List products ordered by name, paginated, in the compact projection
    pub fn list_products(&self, limit: usize, offset: usize) -> CatalogResult<Vec<ProductSummary>> {
        let tables = self.read()?;

        let rows = tables
            .products
            .search(&[active_only()], "name", Some(limit), offset)?;

        Ok(rows.iter().map(ProductSummary::project).collect())
    }

    /// Full projection for one product, archived or not
    pub fn product_detail(&self, id: i64) -> CatalogResult<ProductDetail> {
        let tables = self.read()?;

        let product = tables
            .products
            .get(id)
            .ok_or(CatalogError::ProductNotFound(id))?;

        let category = product.category_id.and_then(|c| tables.categories.get(c));
        let uom = product.uom_id.and_then(|u| tables.uoms.get(u));

        Ok(ProductDetail::project(product, category, uom))
    }

    /// Search products with ANDed filters; `total` counts all matches
    /// regardless of pagination
    pub fn search_products(
        &self,
        filters: &ProductFilters,
        limit: usize,
        offset: usize,
    ) -> CatalogResult<SearchPage> {
        let tables = self.read()?;

        let conditions = build_conditions(&tables, filters)?;
        let total = tables.products.search_count(&conditions)?;
        let rows = tables
            .products
            .search(&conditions, "name", Some(limit), offset)?;

        let products = rows
            .iter()
            .map(|p| ProductHit::project(p, &category_label(&tables, p)))
            .collect();

        Ok(SearchPage { products, total })
    }

    /// All products in the category whose name contains `name`
    /// (case-insensitive). Ambiguity resolves to the lexicographically
    /// first category name; no match yields an empty result, not an error.
    pub fn products_by_category(&self, name: &str) -> CatalogResult<CategoryProducts> {
        let tables = self.read()?;

        // Ordered by name with id tie-break, so the first hit is the winner
        let candidates =
            tables
                .categories
                .search(&[Condition::ilike("name", name)], "name", Some(1), 0)?;

        let category = match candidates.into_iter().next() {
            Some(c) => c,
            None => {
                return Ok(CategoryProducts {
                    category: None,
                    products: Vec::new(),
                })
            }
        };

        let rows = tables.products.search(
            &[active_only(), Condition::eq("category_id", json!(category.id))],
            "name",
            None,
            0,
        )?;

        let products = rows
            .iter()
            .map(|p| ProductHit::project(p, &category.name))
            .collect();

        Ok(CategoryProducts {
            category: Some(category.name),
            products,
        })
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn active_only() -> Condition {
    Condition::eq("active", Value::Bool(true))
}

/// Translate search filters into store conditions
fn build_conditions(
    tables: &CatalogTables,
    filters: &ProductFilters,
) -> CatalogResult<Vec<Condition>> {
    let mut conditions = vec![active_only()];

    if let Some(name) = &filters.name {
        conditions.push(Condition::ilike("name", name));
    }
    if let Some(reference) = &filters.reference {
        conditions.push(Condition::eq("reference", json!(reference)));
    }
    if let Some(barcode) = &filters.barcode {
        conditions.push(Condition::eq("barcode", json!(barcode)));
    }
    if let Some(product_type) = &filters.product_type {
        conditions.push(Condition::eq("product_type", json!(product_type)));
    }
    if let Some(min_price) = filters.min_price {
        conditions.push(Condition::gte("list_price", json!(min_price)));
    }
    if let Some(max_price) = filters.max_price {
        conditions.push(Condition::lte("list_price", json!(max_price)));
    }

    // The category filter matches against category names; translate the
    // matching ids into a membership condition on the product rows.
    if let Some(category) = &filters.category {
        let matching =
            tables
                .categories
                .search(&[Condition::ilike("name", category)], "name", None, 0)?;
        let ids: Vec<Value> = matching.iter().map(|c| json!(c.id)).collect();
        conditions.push(Condition::in_list("category_id", ids));
    }

    Ok(conditions)
}

/// Category name shown on a product row, with the unset fallback
fn category_label(tables: &CatalogTables, product: &Product) -> String {
    product
        .category_id
        .and_then(|id| tables.categories.get(id))
        .map_or_else(|| "All".to_string(), |c| c.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::ProductType;

    fn sample_catalog() -> ProductCatalog {
        let catalog = ProductCatalog::new();
        let furniture = catalog.insert_category("Furniture").unwrap();
        let clothing = catalog.insert_category("Clothing").unwrap();
        let units = catalog.insert_uom("Units").unwrap();

        let mut desk = Product::named("Office Desk");
        desk.reference = Some("DESK-001".to_string());
        desk.barcode = Some("1111111111111".to_string());
        desk.list_price = 120.0;
        desk.quantity_on_hand = 5.0;
        desk.category_id = Some(furniture);
        desk.uom_id = Some(units);
        catalog.insert_product(desk).unwrap();

        let mut shirt = Product::named("Blue Shirt");
        shirt.list_price = 25.0;
        shirt.product_type = ProductType::Consumable;
        shirt.category_id = Some(clothing);
        catalog.insert_product(shirt).unwrap();

        let mut archived = Product::named("Old Chair");
        archived.active = false;
        archived.category_id = Some(furniture);
        catalog.insert_product(archived).unwrap();

        catalog
    }

    #[test]
    fn test_list_orders_by_name_and_skips_archived() {
        let catalog = sample_catalog();

        let products = catalog.list_products(100, 0).unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Blue Shirt", "Office Desk"]);
    }

    #[test]
    fn test_detail_resolves_relations() {
        let catalog = sample_catalog();

        let detail = catalog.product_detail(1).unwrap();
        assert_eq!(detail.name, "Office Desk");
        assert_eq!(detail.category.name, "Furniture");
        assert_eq!(detail.uom.name, "Units");
    }

    #[test]
    fn test_detail_resolves_archived_products() {
        let catalog = sample_catalog();

        let detail = catalog.product_detail(3).unwrap();
        assert!(!detail.active);
    }

    #[test]
    fn test_detail_unknown_id() {
        let catalog = sample_catalog();

        let err = catalog.product_detail(99).unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(99)));
    }

    #[test]
    fn test_search_by_category_name_substring() {
        let catalog = sample_catalog();

        let filters = ProductFilters {
            category: Some("cloth".to_string()),
            ..Default::default()
        };
        let page = catalog.search_products(&filters, 10, 0).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.products[0].name, "Blue Shirt");
        assert_eq!(page.products[0].category, "Clothing");
    }

    #[test]
    fn test_search_unknown_category_matches_nothing() {
        let catalog = sample_catalog();

        let filters = ProductFilters {
            category: Some("doesnotexist".to_string()),
            ..Default::default()
        };
        let page = catalog.search_products(&filters, 10, 0).unwrap();
        assert_eq!(page.total, 0);
        assert!(page.products.is_empty());
    }

    #[test]
    fn test_search_filters_are_anded() {
        let catalog = sample_catalog();

        let filters = ProductFilters {
            name: Some("shirt".to_string()),
            min_price: Some(30.0),
            ..Default::default()
        };
        let page = catalog.search_products(&filters, 10, 0).unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_by_category_prefers_lexicographic_first() {
        let catalog = ProductCatalog::new();
        let zebra = catalog.insert_category("Zebra Supplies").unwrap();
        let apple = catalog.insert_category("Apple Supplies").unwrap();

        let mut in_zebra = Product::named("Hay");
        in_zebra.category_id = Some(zebra);
        catalog.insert_product(in_zebra).unwrap();

        let mut in_apple = Product::named("Cider");
        in_apple.category_id = Some(apple);
        catalog.insert_product(in_apple).unwrap();

        let result = catalog.products_by_category("supplies").unwrap();
        assert_eq!(result.category.as_deref(), Some("Apple Supplies"));
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].name, "Cider");
    }

    #[test]
    fn test_by_category_no_match_is_empty_success() {
        let catalog = sample_catalog();

        let result = catalog.products_by_category("doesnotexist").unwrap();
        assert!(result.category.is_none());
        assert!(result.products.is_empty());
    }

    #[test]
    fn test_insert_product_checks_relations() {
        let catalog = ProductCatalog::new();

        let mut orphan = Product::named("Orphan");
        orphan.category_id = Some(5);
        let err = catalog.insert_product(orphan).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(5)));
    }
}
