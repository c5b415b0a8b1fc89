//! User administration endpoint.

use common::user::UserProfile;
use serde::Deserialize;

use crate::upstream::get_json;

#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<UserProfile>,
}

pub async fn get_all_users(token: String) -> anyhow::Result<Vec<UserProfile>> {
    let response: UsersResponse = get_json("/admin/users", Some(&token)).await?;
    Ok(response.users)
}
