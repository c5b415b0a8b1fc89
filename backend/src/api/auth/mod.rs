//! Authentication endpoints.

mod sessions;
pub use sessions::{current_user, login, register};
