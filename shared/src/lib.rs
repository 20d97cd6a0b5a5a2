//! Shared types and logic for the Supply Chain Dashboard
//!
//! This crate holds the domain models, the mock catalog generator and the
//! pure views derived from it. It is used by the backend CLI and, via WASM,
//! by the browser UI.

pub mod catalog;
pub mod models;
pub mod navigation;
pub mod stats;
pub mod types;
pub mod validation;
pub mod views;

pub use catalog::*;
pub use models::*;
pub use types::*;
pub use validation::*;
