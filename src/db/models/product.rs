//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Bulk pricing tier: unit price drops once the ordered quantity reaches
/// `min_quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WholesaleTier {
    #[validate(range(min = 1))]
    pub min_quantity: u32,
    /// Unit price in minor currency units (cents)
    #[validate(range(min = 0))]
    pub price: i64,
}

/// Product model
///
/// Prices are integer minor currency units (cents). `category` holds the
/// slug of a [`Category`](super::Category); the link is resolved by the
/// presentation layer, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub image: String,
    pub category: String,
    /// Free text, e.g. "2-3 dias"
    #[serde(default)]
    pub preparation_time: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_promo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_text: Option<String>,
    /// Kept sorted by `min_quantity` ascending
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wholesale_tiers: Vec<WholesaleTier>,
}

impl Product {
    /// Unit price for a given quantity, applying the best wholesale tier.
    ///
    /// Falls back to the list price when no tier's threshold is met.
    pub fn unit_price(&self, quantity: u32) -> i64 {
        self.wholesale_tiers
            .iter()
            .filter(|tier| quantity >= tier.min_quantity)
            .last()
            .map(|tier| tier.price)
            .unwrap_or(self.price)
    }

    /// Whether the product can currently be ordered
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Create product payload (id is assigned by the manager)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0))]
    pub price: i64,
    #[serde(default)]
    pub image: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub preparation_time: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_promo: bool,
    pub promo_text: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub wholesale_tiers: Vec<WholesaleTier>,
}

/// Update product payload
///
/// Absent fields are left untouched; present fields overwrite, including
/// explicit empty or zero values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_promo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_text: Option<String>,
    /// `Some(vec![])` clears all tiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wholesale_tiers: Option<Vec<WholesaleTier>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_tiers() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Bolo de Chocolate Premium".to_string(),
            description: String::new(),
            price: 4500,
            image: String::new(),
            category: "bolos".to_string(),
            preparation_time: "2-3 dias".to_string(),
            stock: 5,
            is_promo: false,
            promo_text: None,
            wholesale_tiers: vec![
                WholesaleTier {
                    min_quantity: 3,
                    price: 4000,
                },
                WholesaleTier {
                    min_quantity: 5,
                    price: 3800,
                },
            ],
        }
    }

    #[test]
    fn test_unit_price_applies_best_tier() {
        let product = product_with_tiers();
        assert_eq!(product.unit_price(1), 4500);
        assert_eq!(product.unit_price(2), 4500);
        assert_eq!(product.unit_price(3), 4000);
        assert_eq!(product.unit_price(4), 4000);
        assert_eq!(product.unit_price(5), 3800);
        assert_eq!(product.unit_price(50), 3800);
    }

    #[test]
    fn test_unit_price_without_tiers() {
        let mut product = product_with_tiers();
        product.wholesale_tiers.clear();
        assert_eq!(product.unit_price(10), 4500);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&product_with_tiers()).unwrap();
        assert!(json.contains("\"preparationTime\""));
        assert!(json.contains("\"wholesaleTiers\""));
        assert!(json.contains("\"minQuantity\""));
        assert!(json.contains("\"isPromo\""));
    }

    #[test]
    fn test_deserializes_sparse_record() {
        // Optional fields may be absent in previously persisted snapshots
        let json = r#"{
            "id": "4",
            "name": "Brigadeiros Gourmet",
            "price": 1800,
            "category": "docinhos"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.stock, 0);
        assert!(!product.is_promo);
        assert!(product.promo_text.is_none());
        assert!(product.wholesale_tiers.is_empty());
    }

    #[test]
    fn test_create_payload_validation() {
        use validator::Validate;

        let bad = ProductCreate {
            name: String::new(),
            description: String::new(),
            price: -1,
            image: String::new(),
            category: "bolos".to_string(),
            preparation_time: String::new(),
            stock: 0,
            is_promo: false,
            promo_text: None,
            wholesale_tiers: vec![WholesaleTier {
                min_quantity: 0,
                price: 100,
            }],
        };
        assert!(bad.validate().is_err());
    }
}
