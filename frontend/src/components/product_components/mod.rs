//! Storefront product components.

pub mod filter_accordion;
pub mod product_grid;
pub mod star_rating;
