//! Review administration endpoint.

use common::review::Review;
use serde::Deserialize;

use crate::upstream::get_json;

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    reviews: Vec<Review>,
}

pub async fn get_all_reviews(token: String) -> anyhow::Result<Vec<Review>> {
    let response: ReviewsResponse = get_json("/admin/reviews", Some(&token)).await?;
    Ok(response.reviews)
}
