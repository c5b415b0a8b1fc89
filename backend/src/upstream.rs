//! Shared reqwest helpers for talking to the upstream catalog service.

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

pub fn catalog_api_url() -> String {
    std::env::var("CATALOG_API_URL").unwrap_or("http://127.0.0.1:4000/api/v1".to_string())
}

fn endpoint(path: &str) -> String {
    format!("{}{}", catalog_api_url(), path)
}

fn with_bearer(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> anyhow::Result<T> {
    let client = reqwest::Client::new();
    let request = with_bearer(client.get(endpoint(path)), token);
    request_json(request, path).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> anyhow::Result<T> {
    let client = reqwest::Client::new();
    let request = with_bearer(client.post(endpoint(path)).json(body), token);
    request_json(request, path).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> anyhow::Result<T> {
    let client = reqwest::Client::new();
    let request = with_bearer(client.put(endpoint(path)).json(body), token);
    request_json(request, path).await
}

pub async fn delete_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> anyhow::Result<T> {
    let client = reqwest::Client::new();
    let request = with_bearer(client.delete(endpoint(path)).json(body), token);
    request_json(request, path).await
}

async fn request_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    path: &str,
) -> anyhow::Result<T> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Request to {} failed", path))?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Upstream error on {}: {}: {}", path, status, response_txt);
    }
    info!("upstream {}: {} response bytes", path, response_txt.len());
    let parsed = serde_json::from_str(&response_txt)
        .with_context(|| format!("Invalid JSON from {}", path))?;
    Ok(parsed)
}
