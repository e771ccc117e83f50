//! Product catalog
//!
//! An immutable, ordered list of products loaded once at startup, either the
//! built-in data set or a JSON file named by `CATALOG_PATH`. Product ids are
//! unique; lookups go through an id index.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{Product, ProductSummary};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Built-in catalog data
const BUILTIN_CATALOG_JSON: &str = include_str!("pharmacy_products.json");

/// Highest accepted pack or wholesale price (₪)
pub const MAX_PRICE: i64 = 1_000_000;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Product {0} has a price outside 0..={max}", max = MAX_PRICE)]
    InvalidPrice(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::DuplicateId(id) => {
                AppError::with_message(ErrorCode::ProductDuplicateId, err.to_string())
                    .with_detail("product_id", id.clone())
            }
            CatalogError::InvalidPrice(id) => {
                AppError::with_message(ErrorCode::ProductInvalidPrice, err.to_string())
                    .with_detail("product_id", id.clone())
            }
            CatalogError::Io(_) | CatalogError::Parse(_) => {
                AppError::with_message(ErrorCode::CatalogLoadFailed, err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and prices outside
    /// `0..=MAX_PRICE`
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let price_range = Decimal::ZERO..=Decimal::from(MAX_PRICE);
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if !price_range.contains(&product.pack_price)
                || product
                    .wholesale_price
                    .is_some_and(|p| !price_range.contains(&p))
            {
                return Err(CatalogError::InvalidPrice(product.id.clone()));
            }
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// The catalog shipped with the storefront
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// Parse a JSON array of products
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path` when given, otherwise the built-in catalog
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::builtin()?,
        };
        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string());
        tracing::info!(products = catalog.len(), source = %source, "Catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Reduced records for the assistant widget, in catalog order
    pub fn summaries(&self) -> Vec<ProductSummary> {
        self.products.iter().map(ProductSummary::from).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["alaska-a5", "blue-dream-b3", "og-kush-k1", "eran-almog"]
        );
        let prices: Vec<Decimal> = catalog.iter().map(|p| p.pack_price).collect();
        assert_eq!(
            prices,
            vec![
                Decimal::from(299),
                Decimal::from(280),
                Decimal::from(320),
                Decimal::from(350)
            ]
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get("og-kush-k1").unwrap().name, "OG Kush K1");
        assert!(catalog.get("unknown").is_none());
        assert!(catalog.contains("eran-almog"));
        assert!(!catalog.get("eran-almog").unwrap().in_stock);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut products = catalog.products().to_vec();
        products.push(products[0].clone());

        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "alaska-a5"));

        let app_err: AppError = err.into();
        assert_eq!(app_err.code, ErrorCode::ProductDuplicateId);
    }

    #[test]
    fn test_negative_price_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut products = catalog.products().to_vec();
        products[1].pack_price = Decimal::from(-1);

        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice(ref id) if id == "blue-dream-b3"));
    }

    #[test]
    fn test_oversized_price_rejected() {
        let catalog = Catalog::builtin().unwrap();

        let mut products = catalog.products().to_vec();
        products[0].pack_price = Decimal::MAX / Decimal::from(2);
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice(ref id) if id == "alaska-a5"));
        assert_eq!(AppError::from(err).code, ErrorCode::ProductInvalidPrice);

        let mut products = catalog.products().to_vec();
        products[2].wholesale_price = Some(Decimal::from(MAX_PRICE + 1));
        assert!(Catalog::new(products).is_err());

        let mut products = catalog.products().to_vec();
        products[2].pack_price = Decimal::from(MAX_PRICE);
        assert!(Catalog::new(products).is_ok());
    }

    #[test]
    fn test_malformed_json_is_catalog_load_error() {
        let err = Catalog::from_json("[{\"id\": 1}]").unwrap_err();
        let app_err: AppError = err.into();
        assert_eq!(app_err.code, ErrorCode::CatalogLoadFailed);
    }

    #[test]
    fn test_summaries_keep_assistant_fields() {
        let catalog = Catalog::builtin().unwrap();
        let summaries = catalog.summaries();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[3].id, "eran-almog");
        assert_eq!(summaries[3].thc, 28.0);
        assert!(!summaries[3].in_stock);
    }
}
