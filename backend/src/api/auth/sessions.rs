//! Session endpoints: login, register, and token introspection.

use common::user::{AuthSession, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::upstream::{get_json, post_json};

#[derive(Debug, Serialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct CurrentUserResponse {
    user: UserProfile,
}

pub async fn login(email: String, password: String) -> anyhow::Result<AuthSession> {
    let session: AuthSession = post_json("/login", &LoginBody { email, password }, None).await?;
    info!("Logged in user {}", session.user.email);
    Ok(session)
}

pub async fn register(
    name: String,
    email: String,
    password: String,
) -> anyhow::Result<AuthSession> {
    let session: AuthSession = post_json(
        "/register",
        &RegisterBody {
            name,
            email,
            password,
        },
        None,
    )
    .await?;
    info!("Registered user {}", session.user.email);
    Ok(session)
}

pub async fn current_user(token: String) -> anyhow::Result<UserProfile> {
    let response: CurrentUserResponse = get_json("/me", Some(&token)).await?;
    Ok(response.user)
}
