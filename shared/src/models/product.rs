//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// Promotional ribbon shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Sale,
    New,
}

/// One terpene line of a product's terpene profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terpene {
    pub name: String,
    /// Percentage by weight (e.g., 1.2 = 1.2%)
    pub percentage: f64,
}

/// Catalog product entity
///
/// Immutable once the catalog is loaded. Field names follow the catalog JSON
/// (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable key, unique across the catalog
    pub id: String,
    /// Asset path of the product photo
    #[serde(default)]
    pub image: String,
    pub name: String,
    pub strain_type: String,
    pub manufacturer: String,
    pub genetics: String,
    pub growing_method: String,
    pub serving_type: String,
    /// THC percentage
    pub thc: f64,
    /// CBD percentage (may be fractional)
    pub cbd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cbg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cbn: Option<f64>,
    #[serde(default)]
    pub terpenes: Vec<Terpene>,
    #[serde(default)]
    pub batch_number: String,
    #[serde(default)]
    pub production_date: String,
    #[serde(default)]
    pub expiry_date: String,
    /// Price of one pack in shekels
    pub pack_price: Decimal,
    pub pack_grams: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wholesale_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wholesale_min_units: Option<u32>,
    pub in_stock: bool,
    #[serde(default)]
    pub gmp_certified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl Product {
    /// CBG percentage, 0 when the lab sheet omits it
    pub fn cbg_or_zero(&self) -> f64 {
        self.cbg.unwrap_or(0.0)
    }

    /// CBN percentage, 0 when the lab sheet omits it
    pub fn cbn_or_zero(&self) -> f64 {
        self.cbn.unwrap_or(0.0)
    }

    /// Derived THC/CBD classification, recomputed on every call
    pub fn profile(&self) -> Profile {
        Profile::classify(self.thc, self.cbd)
    }

    /// Bulk price tier as `(unit price, minimum units)`, if both halves exist
    pub fn wholesale_tier(&self) -> Option<(Decimal, u32)> {
        match (self.wholesale_price, self.wholesale_min_units) {
            (Some(price), Some(min_units)) => Some((price, min_units)),
            _ => None,
        }
    }
}

/// Reduced product view handed to the assistant widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub strain_type: String,
    pub thc: f64,
    pub cbd: f64,
    pub manufacturer: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            strain_type: product.strain_type.clone(),
            thc: product.thc,
            cbd: product.cbd,
            manufacturer: product.manufacturer.clone(),
            in_stock: product.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "alaska-a5",
            "image": "/products/prod1.png",
            "name": "Alaska A5",
            "strainType": "אינדיקה דומיננטי",
            "manufacturer": "IMC פארמה",
            "genetics": "Northern Lights x Haze",
            "growingMethod": "אורגני מקורה",
            "servingType": "תפרחת",
            "thc": 22,
            "cbd": 1,
            "terpenes": [{ "name": "Myrcene", "percentage": 1.2 }],
            "packPrice": 299,
            "packGrams": 10,
            "wholesalePrice": 265,
            "wholesaleMinUnits": 10,
            "inStock": true,
            "gmpCertified": true,
            "badge": "sale"
        }"#
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, "alaska-a5");
        assert_eq!(product.pack_price, Decimal::from(299));
        assert_eq!(product.wholesale_tier(), Some((Decimal::from(265), 10)));
        assert_eq!(product.badge, Some(Badge::Sale));
        assert_eq!(product.terpenes.len(), 1);
    }

    #[test]
    fn test_minor_cannabinoids_default_to_zero() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.cbg, None);
        assert_eq!(product.cbg_or_zero(), 0.0);
        assert_eq!(product.cbn_or_zero(), 0.0);
    }

    #[test]
    fn test_wholesale_tier_requires_both_fields() {
        let mut product: Product = serde_json::from_str(sample_json()).unwrap();
        product.wholesale_min_units = None;
        assert_eq!(product.wholesale_tier(), None);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        let summary = ProductSummary::from(&product);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["strainType"], "אינדיקה דומיננטי");
        assert_eq!(json["inStock"], true);
        assert!(json.get("packPrice").is_none());
    }
}
