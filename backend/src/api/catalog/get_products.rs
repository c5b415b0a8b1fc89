//! Product list endpoint.

use common::product::Product;
use serde::Deserialize;

use crate::upstream::get_json;

#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// Fetch the raw product list. `search` is the query-string-encoded
/// filter/search request from the storefront URL, passed through verbatim.
pub async fn get_products(search: String) -> anyhow::Result<Vec<Product>> {
    let path = if search.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{}", search)
    };
    let response: ProductsResponse = get_json(&path, None).await?;
    Ok(response.products)
}
