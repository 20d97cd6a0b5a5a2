//! Request guards

pub mod auth;

pub use auth::{check_route, require_session, CurrentUser};
