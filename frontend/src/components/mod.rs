//! Shared UI components.

pub mod error_boundary;
pub mod suspend_boundary;
pub mod toast;
pub mod store_shell;
pub mod admin_shell;
pub mod product_components;
pub mod admin_components;
