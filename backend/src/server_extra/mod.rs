//! Raw axum routes mounted next to the server functions.

pub mod download_product_image;
