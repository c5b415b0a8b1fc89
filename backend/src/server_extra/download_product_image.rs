//! Streaming proxy for product image downloads.

use anyhow::Context;
use axum::{
    body::Body,
    extract::Path,
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use reqwest::StatusCode;
use tracing::info;

use crate::upstream::catalog_api_url;

async fn _download_product_image(Path(public_id): Path<String>) -> anyhow::Result<impl IntoResponse> {
    info!("Downloading product image: {}", public_id);

    let url = format!("{}/images/{}", catalog_api_url(), public_id);
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("Failed to reach image host for {}", public_id))?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Image host returned {} for {}", status, public_id);
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), content_type),
        (
            "Content-Disposition".to_string(),
            format!("inline; filename=\"{}\"", public_id),
        ),
    ];

    let stream = response.bytes_stream().map_err(std::io::Error::other);
    let body = Body::from_stream(stream);
    Ok((headers, body).into_response())
}

pub async fn download_product_image(Path(public_id): Path<String>) -> Response {
    match _download_product_image(Path(public_id)).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("download_product_image: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}
