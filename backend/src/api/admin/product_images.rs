//! Product image upload and delete endpoints.
//!
//! Images arrive from the browser as base64 data URLs; the upstream service
//! stores them and returns the hosting URL with each product afterwards.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::upstream::{delete_json, put_json};

#[derive(Debug, Serialize)]
struct UploadImagesBody {
    images: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DeleteImageBody {
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

pub async fn upload_product_images(
    token: String,
    product_id: String,
    images: Vec<String>,
) -> anyhow::Result<String> {
    info!(
        "Uploading {} image(s) for product {}",
        images.len(),
        product_id
    );
    let response: MessageResponse = put_json(
        &format!("/admin/products/{}/images", product_id),
        &UploadImagesBody { images },
        Some(&token),
    )
    .await?;
    Ok(response.message)
}

pub async fn delete_product_image(
    token: String,
    product_id: String,
    public_id: String,
) -> anyhow::Result<String> {
    let response: MessageResponse = delete_json(
        &format!("/admin/products/{}/images", product_id),
        &DeleteImageBody { public_id },
        Some(&token),
    )
    .await?;
    Ok(response.message)
}
