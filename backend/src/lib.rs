//! Backend library: HTTP client of the upstream catalog service plus raw
//! server routes.

pub mod api;
pub mod upstream;
pub mod server_extra;
