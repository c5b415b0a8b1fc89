//! Routed pages.

pub mod home_page;
pub mod products_page;
pub mod product_view_page;
pub mod login_page;
pub mod register_page;
pub mod admin;
