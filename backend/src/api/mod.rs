//! API route handlers grouped by concern.

pub mod catalog;
pub mod admin;
pub mod auth;
