//! Client API calls for authentication endpoints.

use common::user::{AuthSession, UserProfile};
use dioxus::prelude::*;




#[server]
pub async fn login(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    let x = backend::api::auth::login(email, password).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn register(
    name: String,
    email: String,
    password: String,
) -> Result<AuthSession, ServerFnError> {
    let x = backend::api::auth::register(name, email, password).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn current_user(token: String) -> Result<UserProfile, ServerFnError> {
    let x = backend::api::auth::current_user(token).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
