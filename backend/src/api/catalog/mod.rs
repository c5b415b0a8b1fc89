//! Catalog read endpoints and module exports.

mod get_products;
pub use get_products::get_products;

mod get_product_details;
pub use get_product_details::get_product_details;

mod reference_lists;
pub use reference_lists::{get_categories, get_collections, get_designers, get_skill_levels};
