//! Client API calls for catalog endpoints.

use common::{product::Product, reference::ReferenceEntity};
use dioxus::prelude::*;




#[server]
pub async fn get_products(search: String) -> Result<Vec<Product>, ServerFnError> {
    let x = backend::api::catalog::get_products(search).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_product_details(product_id: String) -> Result<Product, ServerFnError> {
    let x = backend::api::catalog::get_product_details(product_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_categories() -> Result<Vec<ReferenceEntity>, ServerFnError> {
    let x = backend::api::catalog::get_categories().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_collections() -> Result<Vec<ReferenceEntity>, ServerFnError> {
    let x = backend::api::catalog::get_collections().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_skill_levels() -> Result<Vec<ReferenceEntity>, ServerFnError> {
    let x = backend::api::catalog::get_skill_levels().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_designers() -> Result<Vec<ReferenceEntity>, ServerFnError> {
    let x = backend::api::catalog::get_designers().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
