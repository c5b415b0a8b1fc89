//! Server function wrappers around the backend API.

pub mod catalog_api;
pub mod admin_api;
pub mod auth_api;
