//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod product;
pub mod reference;
pub mod facets;
pub mod filter;
pub mod order;
pub mod user;
pub mod review;
