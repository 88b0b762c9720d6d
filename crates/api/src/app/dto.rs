use serde::Deserialize;

use catalog_products::Product;

// -------------------------
// Request DTOs
// -------------------------

/// Body for create and update. An update replaces every field; there is no
/// sparse merge.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id().to_string(),
        "name": product.name(),
        "description": product.description(),
        "price": product.price(),
    })
}
