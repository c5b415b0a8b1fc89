//! Product models shared between frontend and backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Product {
    pub _id: String,
    pub product_name: String,
    pub description: String,
    pub price: f64,
    /// Category ids this product belongs to. May be empty.
    pub product_category: Vec<String>,
    pub collection: Option<String>,
    #[serde(rename = "skillLevel")]
    pub skill_level: Option<String>,
    pub designer: Option<String>,
    pub ratings: f64,
    pub stock: i64,
    pub seller: String,
    pub product_images: Vec<ProductImage>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductImage {
    pub public_id: String,
    pub url: String,
}

impl Product {
    pub fn first_image_url(&self) -> Option<&str> {
        self.product_images.first().map(|img| img.url.as_str())
    }
}
