//! Review models for the admin console.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Review {
    pub _id: String,
    pub product: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub user: String,
    pub rating: f64,
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}
