use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Scoring criteria ---

/// Weight key for the price criterion. Cheaper products score higher.
pub const CRITERION_PRICE: &str = "price";

/// Weight key for the flat discount criterion.
pub const CRITERION_DISCOUNT: &str = "discount";

/// Weight key for the percentage discount-rate criterion.
pub const CRITERION_TAUX_REMISE: &str = "tauxRemise";

/// Caller-supplied criterion-to-weight mapping for comparison scoring.
/// A criterion without a key contributes nothing to the score; keys that
/// match no known criterion are ignored.
pub type WeightSpec = HashMap<String, f64>;

// --- Products ---

/// A catalog product. `id` and the audit timestamps are assigned by the
/// store and never taken from client payloads. Wire format is camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub designation: String,
    pub price: f64,
    /// Flat discount amount.
    pub discount: f64,
    /// Percentage discount rate, a separate figure from `discount`.
    pub discount_rate: f64,
    pub image: String,
    pub article: String,
    pub category: String,
    pub brand: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied product fields, used both to create a product and to
/// fully overwrite an existing one. Anything omitted falls back to its
/// zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    pub designation: String,
    pub price: f64,
    pub discount: f64,
    pub discount_rate: f64,
    pub image: String,
    pub article: String,
    pub category: String,
    pub brand: String,
}

/// A product paired with its comparison score. Request-scoped output of
/// the scoring pass; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    pub product: Product,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_camel_case() {
        let ts = DateTime::from_timestamp(0, 0).unwrap();
        let product = Product {
            id: 7,
            designation: "Standing desk".to_string(),
            price: 499.0,
            discount: 50.0,
            discount_rate: 10.0,
            image: "https://img.example/desk.png".to_string(),
            article: "Adjustable height".to_string(),
            category: "furniture".to_string(),
            brand: "acme".to_string(),
            created_at: ts,
            updated_at: ts,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["discountRate"], 10.0);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["updatedAt"], "1970-01-01T00:00:00Z");
        assert!(json.get("discount_rate").is_none());
    }

    #[test]
    fn new_product_fills_missing_fields_with_zero_values() {
        let draft: NewProduct =
            serde_json::from_str(r#"{"designation": "Lamp", "price": 25.0}"#).unwrap();

        assert_eq!(draft.designation, "Lamp");
        assert_eq!(draft.price, 25.0);
        assert_eq!(draft.discount, 0.0);
        assert_eq!(draft.discount_rate, 0.0);
        assert!(draft.image.is_empty());
        assert!(draft.brand.is_empty());
    }

    #[test]
    fn weight_spec_parses_criterion_keys() {
        let weights: WeightSpec =
            serde_json::from_str(r#"{"price": 0.5, "discount": 0.3, "tauxRemise": 0.2}"#).unwrap();

        assert_eq!(weights[CRITERION_PRICE], 0.5);
        assert_eq!(weights[CRITERION_DISCOUNT], 0.3);
        assert_eq!(weights[CRITERION_TAUX_REMISE], 0.2);
    }
}
