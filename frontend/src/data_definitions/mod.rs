//! Client-side data definitions shared across pages.

pub mod url_param;
pub mod session;
