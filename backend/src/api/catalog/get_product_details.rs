//! Single product endpoint.

use common::product::Product;
use serde::Deserialize;

use crate::upstream::get_json;

#[derive(Debug, Deserialize)]
struct ProductDetailsResponse {
    product: Product,
}

pub async fn get_product_details(product_id: String) -> anyhow::Result<Product> {
    let response: ProductDetailsResponse =
        get_json(&format!("/products/{}", product_id), None).await?;
    Ok(response.product)
}
