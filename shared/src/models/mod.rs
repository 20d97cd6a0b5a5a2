//! Domain models for the supply-chain dashboard

mod dashboard;
mod order;
mod product;
mod supplier;
mod user;

pub use dashboard::*;
pub use order::*;
pub use product::*;
pub use supplier::*;
pub use user::*;
