//! Test fixtures and utilities

pub mod encyclopedia;
pub mod models;

#[allow(unused_imports)]
pub use encyclopedia::*;
#[allow(unused_imports)]
pub use models::*;
