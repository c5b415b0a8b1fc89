//! Admin console pages.

pub mod dashboard_page;
pub mod products_page;
pub mod product_images_page;
pub mod orders_page;
pub mod users_page;
pub mod reviews_page;
