//! Product Model

use serde::{Deserialize, Serialize};

/// Display name used when a product has no category reference
pub const CATEGORY_NAME_GENERAL: &str = "General";
/// Display name used when a category reference cannot be resolved
pub const CATEGORY_NAME_UNKNOWN: &str = "Unknown";

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Category reference (String ID, may be empty)
    #[serde(default)]
    pub category_id: String,
    pub price: f64,
    /// Selling unit, e.g. "KG", "ADET", "DEMET"
    pub unit_type: String,
    /// Available quantity, fractional for weight-priced goods
    pub stock: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Product with its resolved category display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: String,
}

/// Create / replace product payload
///
/// Used for both `POST /admin/products` and `PUT /admin/products/{id}`;
/// an update replaces every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub category_id: String,
    pub price: f64,
    pub unit_type: String,
    pub stock: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Query parameters for product listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub category_id: Option<String>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_view_flattens_product_fields() {
        let view = ProductView {
            product: Product {
                id: "product:domates".to_string(),
                name: "Domates".to_string(),
                category_id: "category:sebze".to_string(),
                price: 25.0,
                unit_type: "KG".to_string(),
                stock: 97.5,
                image: None,
                description: None,
            },
            category_name: "Sebzeler".to_string(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "product:domates");
        assert_eq!(json["stock"], 97.5);
        assert_eq!(json["category_name"], "Sebzeler");
        assert!(json.get("product").is_none());
    }

    #[test]
    fn product_create_defaults_optional_fields() {
        let payload: ProductCreate =
            serde_json::from_str(r#"{"name":"Roka","price":8,"unit_type":"DEMET","stock":50}"#)
                .unwrap();
        assert_eq!(payload.category_id, "");
        assert!(payload.image.is_none());
        assert_eq!(payload.stock, 50.0);
    }
}
