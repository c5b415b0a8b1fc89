//! Client API calls for admin console endpoints.

use common::{order::Order, review::Review, user::UserProfile};
use dioxus::prelude::*;




#[server]
pub async fn get_all_orders(token: String) -> Result<Vec<Order>, ServerFnError> {
    let x = backend::api::admin::get_all_orders(token).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_all_users(token: String) -> Result<Vec<UserProfile>, ServerFnError> {
    let x = backend::api::admin::get_all_users(token).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_all_reviews(token: String) -> Result<Vec<Review>, ServerFnError> {
    let x = backend::api::admin::get_all_reviews(token).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn upload_product_images(
    token: String,
    product_id: String,
    images: Vec<String>,
) -> Result<String, ServerFnError> {
    let x = backend::api::admin::upload_product_images(token, product_id, images).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn delete_product_image(
    token: String,
    product_id: String,
    public_id: String,
) -> Result<String, ServerFnError> {
    let x = backend::api::admin::delete_product_image(token, product_id, public_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
